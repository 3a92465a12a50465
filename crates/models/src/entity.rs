/// Contract every persisted catalog record satisfies: a numeric identifier
/// (0 = not yet persisted) and a required name the repository can look up.
pub trait CatalogEntity {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn name(&self) -> &str;
}

/// Contract for wire shapes accepted by the generic CRUD service.
/// `validate` reports one message per failing rule; an empty list means the
/// object may be handed to persistence.
pub trait TransferObject {
    fn id(&self) -> i64;
    fn validate(&self) -> Vec<String>;
}

pub const MAX_NAME_LEN: usize = 200;

/// Shared name rules used by every transfer object.
pub fn validate_name(name: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("name is required".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        errors.push(format!("name must be {} characters or fewer", MAX_NAME_LEN));
    }
    errors
}
