use serde::Serialize;

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join a package and a simple name into a qualified name
pub fn qualify(package_name: &str, simple_name: &str) -> String {
    if package_name.is_empty() {
        simple_name.to_string()
    } else {
        format!("{package_name}.{simple_name}")
    }
}

/// The five companion type names generated for one annotated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanionNames {
    pub abstract_block: String,
    pub inventory: String,
    pub block_entity: String,
    pub screen_handler: String,
    pub screen: String,
}

impl CompanionNames {
    pub fn for_class(class_name: &str) -> Self {
        Self {
            abstract_block: format!("Abstract{}", capitalize_first(class_name)),
            inventory: format!("{class_name}Inventory"),
            block_entity: format!("Base{class_name}Entity"),
            screen_handler: format!("{class_name}ScreenHandler"),
            screen: format!("{class_name}Screen"),
        }
    }

    /// All names in emission order
    pub fn all(&self) -> [&str; 5] {
        [
            &self.abstract_block,
            &self.inventory,
            &self.block_entity,
            &self.screen_handler,
            &self.screen,
        ]
    }
}
