use petstore_derive::model_error;

#[model_error]
pub struct DemoError {
    message: String,
}

fn main() {}
