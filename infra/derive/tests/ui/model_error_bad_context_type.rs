use petstore_derive::model_error;

#[model_error]
pub enum DemoError {
    #[error("Missing field: {field}")]
    MissingField { field: String, context: Option<String> },
}

fn main() {}
