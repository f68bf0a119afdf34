use log::trace;

/// Marker the parser reads as the binary nth-root operator.
pub const NTH_ROOT_MARKER: char = '@';

const NTH_ROOT_GLYPH: &str = "ⁿ√x";
const RADICAL_GLYPH: &str = "√";
const SQRT_NAME: &str = "sqrt";

/// Rewrites display glyphs into the ASCII tokens the parser understands and
/// strips all whitespace. No validation happens here.
///
/// The nth-root glyph must be replaced before the bare radical, since it
/// contains one.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = stripped
        .replace(NTH_ROOT_GLYPH, &NTH_ROOT_MARKER.to_string())
        .replace(RADICAL_GLYPH, SQRT_NAME)
        .replace('×', "*")
        .replace('÷', "/");

    trace!("normalized {:?} -> {:?}", raw, normalized);
    normalized
}
