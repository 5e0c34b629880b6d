/// A named unit of work. Rows are snapshots of the store, not live handles;
/// edits only take effect through `Tasks::update`.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
