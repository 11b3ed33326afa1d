use anyhow::Result;

use folio_core::validate::{FormData, FormValidator};

pub fn run(email: Option<String>, message: Option<String>) -> Result<()> {
    let validator = FormValidator::new();
    let result = validator.validate(&FormData { email, message });

    if result.is_valid {
        println!("ok");
        return Ok(());
    }

    if let Some(error) = result.errors.email {
        println!("email: {}", error);
    }
    if let Some(error) = result.errors.message {
        println!("message: {}", error);
    }
    std::process::exit(1);
}
