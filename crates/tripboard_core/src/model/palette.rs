//! Fixed participant color palette.

/// Participant colors, assigned round-robin by insertion index.
pub const PALETTE: [&str; 10] = [
    "#8B4513", // saddle brown
    "#1B4B6B", // navy
    "#2F4F4F", // dark slate gray
    "#CD5C5C", // indian red
    "#DAA520", // golden rod
    "#556B2F", // olive
    "#4A708B", // steel blue
    "#8B7355", // burly wood
    "#CD853F", // peru
    "#698B69", // dark sea green
];

/// Returns the palette entry for the `index`-th participant.
pub fn color_for_index(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
