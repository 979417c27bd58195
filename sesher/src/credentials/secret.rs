/// Source of the shared password, looked up by variable name on every sign-in.
pub trait SecretSource {
    fn secret(&self, key: &str) -> Option<String>;
}

/// Reads the shared password from the process environment.
///
/// Nothing is cached, so rotating the variable takes effect on the next
/// sign-in. Values that are not valid unicode count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecret;

impl SecretSource for EnvSecret {
    fn secret(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> SecretSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn secret(&self, key: &str) -> Option<String> {
        self(key)
    }
}
