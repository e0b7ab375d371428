//! Stock operations on an [`Item`](crate::model::Item) beyond CRUD.

/// Custom actions for Item entities.
#[derive(Debug, Clone)]
pub enum ItemAction {
    /// Reads the stock on hand without changing it.
    CheckStock,
    /// Deducts stock. Fails with `InsufficientStock` if it would go negative.
    ReserveStock(u32),
    /// Puts previously reserved stock back.
    ReleaseStock(u32),
}

/// Results from ItemActions - variants match 1:1 with ItemAction.
/// Each carries the stock on hand after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemActionResult {
    CheckStock(u32),
    ReserveStock(u32),
    ReleaseStock(u32),
}
