//! Font descriptor for label and notification text.

/// Font configuration for Pango-rendered text.
///
/// Built from the `[ui]` config section and shared by the panel labels,
/// the title and the notification toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Inter", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "semibold")
    pub weight: String,

    /// Font style (e.g., "normal", "italic")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal", "normal")
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, weight: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Same family and style with a different weight.
    pub fn with_weight(&self, weight: &str) -> Self {
        Self {
            weight: weight.to_string(),
            ..self.clone()
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 14" or "Monospace Italic 12"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_default_omits_normal_parts() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(13.6), "Sans 14");
    }

    #[test]
    fn pango_string_bold() {
        let font = FontDescriptor::default().with_weight("bold");
        assert_eq!(font.to_pango_string(22.0), "Sans Bold 22");
    }

    #[test]
    fn pango_string_custom() {
        let font = FontDescriptor::new("JetBrains Mono", "light", "italic");
        assert_eq!(font.to_pango_string(16.0), "JetBrains Mono Italic Light 16");
    }
}
