//! Integration test support for kgen
//!
//! Re-exports the core crate and provides snapshot fixtures shared by the
//! tests in `tests/`.

pub use kgen_core::*;

pub mod fixtures {
    use serde_json::{Value, json};
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub const SETTINGS_TYPE: &str =
        "net.fabricmc.fabric.api.object.builder.v1.block.FabricBlockSettings";
    pub const ANNOTATION: &str = "nipah.minecraft.ui.annotations.BlockAsContainer";

    /// A conforming container class in `my.mod` inheriting its generated base
    pub fn container(name: &str, gui: &str, item_count: i64) -> Value {
        json!({
            "package_name": "my.mod",
            "simple_name": name,
            "qualified_name": format!("my.mod.{name}"),
            "primary_constructor": [{"name": "settings", "type": SETTINGS_TYPE}],
            "companion_object": {
                "package_name": "my.mod",
                "simple_name": "Companion",
                "qualified_name": format!("my.mod.{name}.Companion"),
                "is_companion_object": true,
                "properties": [{"name": "ID", "type": "net.minecraft.util.Identifier"}]
            },
            "super_types": [format!("my.mod.Abstract{name}")],
            "annotations": [{
                "name": ANNOTATION,
                "arguments": [
                    {"name": "itemCount", "value": {"kind": "int", "value": item_count}},
                    {"name": "gui", "value": {"kind": "type", "value": format!("my.mod.{gui}")}}
                ]
            }]
        })
    }

    /// A GUI in `my.mod` with only a `render(ContainerGUI)` hook
    pub fn render_gui(name: &str) -> Value {
        json!({
            "package_name": "my.mod",
            "simple_name": name,
            "qualified_name": format!("my.mod.{name}"),
            "super_types": ["nipah.minecraft.ui.lib.GUI"],
            "functions": [{
                "name": "render",
                "parameters": [{"name": "container", "type": "nipah.minecraft.ui.lib.ContainerGUI"}]
            }]
        })
    }

    /// A ticking GUI with a state record `{count: Int, label: String}`
    pub fn ticking_gui_with_state(name: &str) -> Vec<Value> {
        vec![
            json!({
                "package_name": "my.mod",
                "simple_name": name,
                "qualified_name": format!("my.mod.{name}"),
                "super_types": ["nipah.minecraft.ui.lib.GUI"],
                "functions": [{"name": "tick", "return_type": "kotlin.Boolean"}],
                "properties": [{"name": "state", "type": format!("my.mod.{name}State"), "mutable": true}]
            }),
            json!({
                "package_name": "my.mod",
                "simple_name": format!("{name}State"),
                "qualified_name": format!("my.mod.{name}State"),
                "super_types": ["nipah.minecraft.ui.lib.UIState"],
                "properties": [
                    {"name": "count", "type": "kotlin.Int", "mutable": true},
                    {"name": "label", "type": "kotlin.String", "mutable": true}
                ]
            }),
        ]
    }

    /// Write `declarations` as `symbols.json` into a fresh temporary directory
    pub fn snapshot_dir(declarations: &[Value]) -> std::io::Result<(TempDir, PathBuf)> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("symbols.json");
        std::fs::write(&path, serde_json::to_string_pretty(declarations)?)?;
        Ok((temp_dir, path))
    }
}
