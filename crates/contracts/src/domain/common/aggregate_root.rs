use super::EntityMetadata;

/// Trait implemented by every aggregate root in the system.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ========================================================================
    // Instance data
    // ========================================================================

    fn id(&self) -> Self::Id;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ========================================================================
    // Static aggregate class metadata
    // ========================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (e.g. "sponsor_store")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "協賛店舗")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "協賛店舗一覧")
    fn list_name() -> &'static str;

    /// Fully qualified name, e.g. "a001_sponsor_store"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
