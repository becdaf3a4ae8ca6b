//! Short display names for well-known resource types.

/// Raw identifier to display label. Identifiers not listed here are shown as-is.
pub const DISPLAY_LABELS: [(&str, &str); 6] = [
    ("azurerm_resource_group", "resource_group"),
    ("azurerm_virtual_network", "virtual_network"),
    ("azurerm_network_interface", "network_interface"),
    ("azurerm_network_security_group", "security_group"),
    ("azurerm_windows_virtual_machine", "virtual_machine"),
    ("azurerm_subnet", "subnet"),
];

/// Maps a raw resource-type identifier to its display label.
///
/// # Examples
///
/// ```
/// use resource_tally::domain::display_label::display_label;
///
/// assert_eq!(display_label("azurerm_subnet"), "subnet");
/// assert_eq!(display_label("unknown_type"), "unknown_type");
/// ```
pub fn display_label(raw: &str) -> &str {
    DISPLAY_LABELS
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw)
}
