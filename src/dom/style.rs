//! Inline style declarations.

/// Ordered `property: value` rules backing an element's `style` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    rules: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `"key: val; key2: val2"` css text
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        style.set_css_text(css_text);
        style
    }

    /// Replace every rule with the ones in `css_text`. Entries without a
    /// `property:value` shape are skipped.
    pub fn set_css_text(&mut self, css_text: &str) {
        self.rules.clear();
        for entry in css_text.split(';') {
            let Some((key, val)) = entry.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let key = if key.starts_with("--") {
                key.to_string()
            } else {
                key.to_ascii_lowercase()
            };
            self.set_normalized(key, val.trim());
        }
    }

    /// Assign a single rule. Accepts script-style (`fontSize`) or css-style
    /// (`font-size`) names; an empty value removes the rule.
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.set_normalized(css_property_name(name), value.trim());
    }

    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        let name = css_property_name(name);
        self.rules
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = css_property_name(name);
        let index = self.rules.iter().position(|(k, _)| *k == name)?;
        Some(self.rules.remove(index).1)
    }

    pub fn css_text(&self) -> String {
        self.rules
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn set_normalized(&mut self, name: String, value: &str) {
        if value.is_empty() {
            self.rules.retain(|(k, _)| *k != name);
            return;
        }
        match self.rules.iter_mut().find(|(k, _)| *k == name) {
            Some(rule) => rule.1 = value.to_string(),
            None => self.rules.push((name, value.to_string())),
        }
    }
}

/// `backgroundColor` -> `background-color`, `cssFloat` -> `float`.
/// Custom properties are left untouched.
pub fn css_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    if name == "cssFloat" {
        return "float".to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
