mod operations;
mod secret;
mod validation;

pub use operations::{sign_in, sign_out};
pub use secret::{EnvSecret, SecretSource};
pub use validation::{FieldIssue, PASSWORD_FIELD, Password, SignInForm};
