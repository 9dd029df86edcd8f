use petstore_derive::model_error;

#[model_error]
pub enum DemoError {
    #[error("Unknown token: {0}")]
    UnknownToken(String),
}

fn main() {}
