/// Custom actions for Customer entities.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Records a placed order against the customer.
    AttachOrder(String),
}

/// Results from CustomerActions.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerActionResult {
    /// Number of orders now attached.
    AttachOrder(usize),
}
