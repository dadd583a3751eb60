use super::AggregateId;

/// Root of an aggregate
///
/// Binds a record type to its id and to the collection it is served from.
pub trait AggregateRoot {
    /// Id type of the aggregate
    type Id: AggregateId;

    /// Record id
    fn id(&self) -> &Self::Id;

    /// Collection name, used for `/api/<name>` and `<name>.json`
    fn collection_name() -> &'static str;

    /// Human-readable name
    fn element_name() -> &'static str;
}
