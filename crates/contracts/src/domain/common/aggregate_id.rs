/// Typed identifier for an aggregate, round-trippable through its string form.
///
/// Every aggregate defines a newtype over `Uuid` implementing this trait so
/// ids of different aggregates cannot be mixed up at compile time.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
