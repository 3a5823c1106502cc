/// Typed identifier for a store record
pub trait RecordId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
