//! Runtime library generator
//!
//! Emits the fixed contract surface that user GUIs and generated containers
//! implement against: the GUI capability, the screen wrapper handed to
//! containers while drawing, the container layout, the state marker, the
//! request-dispatch capability and the state buffer codecs.

use super::emit_source;
use crate::{
    config::GeneratorConfig,
    error::Result,
    interfaces::{DiagnosticSink, EmissionSink, Generator, SymbolResolver},
    kgen::{Fun, Interface, Param, Singleton, Source, Verbatim},
    types::{PrimitiveKind, SymbolRef},
};

/// Name of the unit declaring the state marker
const STATE_UNIT: &str = "State";
/// Name of the object holding the state buffer codecs
pub const STATE_BUFFERS: &str = "StateBuffers";
/// Name of the screen wrapper unit
pub const SCREEN_WRAPPER: &str = "ScreenWrapper";

pub struct LibGenerator {
    config: GeneratorConfig,
}

impl LibGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn package(&self) -> &str {
        &self.config.lib_package
    }

    fn gui_name(&self) -> &str {
        GeneratorConfig::simple_name(&self.config.gui_type)
    }

    fn container_name(&self) -> &str {
        GeneratorConfig::simple_name(&self.config.container_gui_type)
    }

    /// Every library unit in emission order
    pub fn sources(&self) -> Vec<Source> {
        vec![
            self.gui(),
            self.screen_wrapper(),
            self.container_gui(),
            self.state(),
            self.screen_handler_interface(),
            self.state_buffers(),
        ]
    }

    fn gui(&self) -> Source {
        let container = self.container_name();
        Source::new(self.package(), self.gui_name())
            .with_imports([
                "net.minecraft.entity.player.PlayerInventory",
                "net.minecraft.inventory.Inventory",
            ])
            .with_maker(Interface::new(self.gui_name()).with_raw(format!(
                "fun makeSlots(playerInventory: PlayerInventory, inventory: Inventory): {container}\n\
                 fun makeScreen(): {container}"
            )))
    }

    fn screen_wrapper(&self) -> Source {
        Source::new(self.package(), SCREEN_WRAPPER)
            .with_imports([
                "net.minecraft.client.font.TextRenderer",
                "net.minecraft.client.util.math.MatrixStack",
                "net.minecraft.text.Text",
            ])
            .with_maker(Verbatim::new(
                "data class ScreenWrapper(
    val width: WrappedProperty<Int>,
    val height: WrappedProperty<Int>,
    val backgroundWidth: WrappedProperty<Int>,
    val backgroundHeight: WrappedProperty<Int>,
    val title: Text,
    val titleX: WrappedProperty<Int>,
    val titleY: WrappedProperty<Int>,
    val textRenderer: WrappedProperty<TextRenderer?>,

    val drawTexture: (matrices: MatrixStack?, x: Int, y: Int, u: Int, v: Int, width: Int, height: Int) -> Unit,
    val drawTextWithShadow: (matrices: MatrixStack, textRenderer: TextRenderer, text: Text, x: Int, y: Int, color: Int) -> Unit,
    val drawCenteredText: (matrices: MatrixStack, textRenderer: TextRenderer, text: Text, centerX: Int, y: Int, color: Int) -> Unit
)",
            ))
            .with_maker(Verbatim::new(
                "class WrappedProperty<T>(val get: () -> T, val set: (T) -> Unit)",
            ))
    }

    fn container_gui(&self) -> Source {
        let container = self.container_name();
        Source::new(self.package(), container)
            .with_imports([
                "com.mojang.blaze3d.systems.RenderSystem",
                "net.minecraft.client.MinecraftClient",
                "net.minecraft.client.util.math.MatrixStack",
                "net.minecraft.entity.player.PlayerInventory",
                "net.minecraft.inventory.Inventory",
                "net.minecraft.screen.slot.Slot",
                "net.minecraft.text.Text",
                "net.minecraft.util.Identifier",
            ])
            .with_maker(Verbatim::new(format!(
                "class {container} {{
    val slots = mutableListOf<Slot>()
    val images = mutableListOf<Image>()
    val strings = mutableListOf<StringUI>()

    fun find(name: String): UIElement? {{
        return images.firstOrNull {{ it.name == name }} ?: strings.firstOrNull {{ it.name == name }}
    }}

    fun slot(inventory: Inventory, index: Int, x: Int, y: Int): Slot {{
        val slot = Slot(inventory, index, x, y)
        slots.add(slot)
        return slot
    }}

    fun image(id: Identifier, x: Int, y: Int, width: Int, height: Int, name: String = \"image\"): Image {{
        val image = Image(id, x, y, width, height, name)
        images.add(image)
        return image
    }}

    fun string(text: String, x: Int, y: Int, color: Int, name: String = \"string\"): StringUI {{
        val string = StringUI(text, x, y, color, name)
        strings.add(string)
        return string
    }}

    fun defaultPlayerSlots(playerInventory: PlayerInventory) {{
        for (row in 0 until 3) {{
            for (column in 0 until 9) {{
                slot(playerInventory, column + row * 9 + 9, 8 + column * 18, 84 + row * 18)
            }}
        }}
        for (column in 0 until 9) {{
            slot(playerInventory, column, 8 + column * 18, 142)
        }}
    }}

    fun drawBackground(matrices: MatrixStack?, delta: Float, mouseX: Int, mouseY: Int, screen: {SCREEN_WRAPPER}) {{
        RenderSystem.color4f(1.0F, 1.0F, 1.0F, 1.0F)
        images.forEach {{
            MinecraftClient.getInstance().textureManager.bindTexture(it.id)
            if (it.isBackground) {{
                val backgroundWidth = screen.backgroundWidth.get()
                val backgroundHeight = screen.backgroundHeight.get()
                val x = (screen.width.get() - backgroundWidth) / 2
                val y = (screen.height.get() - backgroundHeight) / 2
                screen.drawTexture(matrices, x, y, 0, 0, backgroundWidth, backgroundHeight)
            }} else {{
                screen.drawTexture(matrices, it.x, it.y, 0, 0, it.width, it.height)
            }}
        }}

        if (matrices == null) {{
            return
        }}

        val textRenderer = screen.textRenderer.get() ?: return
        strings.forEach {{
            screen.drawCenteredText(matrices, textRenderer, Text.of(it.text), it.x, it.y, it.color)
        }}
    }}
}}"
            )))
            .with_maker(Verbatim::new("open class UIElement(val name: String)"))
            .with_maker(Verbatim::new(
                "class Image(var id: Identifier, var x: Int, var y: Int, var width: Int, var height: Int, name: String = \"image\") : UIElement(name) {
    var isBackground = false

    fun background(): Image {
        isBackground = true
        return this
    }
}",
            ))
            .with_maker(Verbatim::new(
                "class StringUI(var text: String, var x: Int, var y: Int, var color: Int, name: String = \"string\") : UIElement(name)",
            ))
    }

    fn state(&self) -> Source {
        let marker = GeneratorConfig::simple_name(&self.config.ui_state_type);
        Source::new(self.package(), STATE_UNIT).with_maker(Interface::new(marker))
    }

    fn screen_handler_interface(&self) -> Source {
        let name = GeneratorConfig::simple_name(&self.config.screen_handler_interface);
        let (namespace, path) = self
            .config
            .state_channel
            .split_once(':')
            .unwrap_or(("minecraft", self.config.state_channel.as_str()));

        Source::new(self.package(), name)
            .with_imports([
                "net.minecraft.network.PacketByteBuf",
                "net.minecraft.util.Identifier",
            ])
            .with_maker(Interface::new(name).with_raw(format!(
                "companion object {{\n\
                 val STATE_CHANNEL = Identifier(\"{namespace}\", \"{path}\")\n\
                 }}\n\n\
                 var entityId: Long\n\n\
                 fun updateState(buf: PacketByteBuf)"
            )))
    }

    fn state_buffers(&self) -> Source {
        let codecs = PrimitiveKind::ALL
            .iter()
            .fold(Singleton::new(STATE_BUFFERS), |object, &kind| {
                let codec = BufferCodec::of(kind);
                object
                    .with_fun(
                        Fun::new(kind.writer())
                            .with_param(Param::new("buf", "PacketByteBuf"))
                            .with_param(Param::new("value", codec.kotlin_type))
                            .with_body(codec.write),
                    )
                    .with_fun(
                        Fun::new(kind.reader())
                            .with_param(Param::new("buf", "PacketByteBuf"))
                            .returns(codec.kotlin_type)
                            .with_body(format!("return {}", codec.read)),
                    )
            });

        Source::new(self.package(), STATE_BUFFERS)
            .with_imports([
                "java.util.Date",
                "java.util.UUID",
                "net.minecraft.network.PacketByteBuf",
                "net.minecraft.text.Text",
                "net.minecraft.util.Identifier",
                "net.minecraft.util.math.BlockPos",
            ])
            .with_maker(codecs)
    }
}

/// How one whitelisted kind crosses the engine packet buffer
struct BufferCodec {
    kotlin_type: &'static str,
    write: &'static str,
    read: &'static str,
}

impl BufferCodec {
    fn of(kind: PrimitiveKind) -> Self {
        let (kotlin_type, write, read) = match kind {
            PrimitiveKind::Integer => ("Int", "buf.writeInt(value)", "buf.readInt()"),
            PrimitiveKind::Long => ("Long", "buf.writeLong(value)", "buf.readLong()"),
            PrimitiveKind::Float => ("Float", "buf.writeFloat(value)", "buf.readFloat()"),
            PrimitiveKind::Double => ("Double", "buf.writeDouble(value)", "buf.readDouble()"),
            PrimitiveKind::Boolean => ("Boolean", "buf.writeBoolean(value)", "buf.readBoolean()"),
            PrimitiveKind::Text => ("String", "buf.writeString(value)", "buf.readString(32767)"),
            PrimitiveKind::Uuid => ("UUID", "buf.writeUuid(value)", "buf.readUuid()"),
            PrimitiveKind::Date => ("Date", "buf.writeLong(value.time)", "Date(buf.readLong())"),
            PrimitiveKind::Identifier => {
                ("Identifier", "buf.writeIdentifier(value)", "buf.readIdentifier()")
            }
            PrimitiveKind::Component => ("Text", "buf.writeText(value)", "buf.readText()"),
            PrimitiveKind::BlockPos => ("BlockPos", "buf.writeBlockPos(value)", "buf.readBlockPos()"),
        };
        Self {
            kotlin_type,
            write,
            read,
        }
    }
}

impl Generator for LibGenerator {
    fn run(
        &mut self,
        _resolver: &dyn SymbolResolver,
        sink: &mut dyn EmissionSink,
        _diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<Vec<SymbolRef>> {
        for source in self.sources() {
            emit_source(sink, &source)?;
        }
        tracing::info!("Emitted runtime library into {}", self.package());
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CollectingDiagnostics, MemorySink, SnapshotResolver};

    fn run(config: GeneratorConfig) -> MemorySink {
        let mut sink = MemorySink::new();
        let continuation = LibGenerator::new(config)
            .run(
                &SnapshotResolver::default(),
                &mut sink,
                &mut CollectingDiagnostics::new(),
            )
            .unwrap();
        assert!(continuation.is_empty());
        sink
    }

    #[test]
    fn test_library_units() {
        let sink = run(GeneratorConfig::default());

        assert_eq!(
            sink.file_names(),
            vec![
                "GUI",
                "ScreenWrapper",
                "ContainerGUI",
                "State",
                "NipahUIScreenHandler",
                "StateBuffers"
            ]
        );
        assert!(sink.units().iter().all(|u| u.package_name == "nipah.minecraft.ui.lib"));
        assert_eq!(
            sink.find("State").unwrap().text,
            "package nipah.minecraft.ui.lib\n\n\n\ninterface UIState {\n\n\n}"
        );
    }

    #[test]
    fn test_screen_handler_contract() {
        let sink = run(GeneratorConfig::default());
        let text = &sink.find("NipahUIScreenHandler").unwrap().text;

        assert!(text.contains("interface NipahUIScreenHandler {"));
        assert!(text.contains("val STATE_CHANNEL = Identifier(\"nipah-minecraft-ui\", \"state\")"));
        assert!(text.contains("var entityId: Long"));
        assert!(text.contains("fun updateState(buf: PacketByteBuf)"));
    }

    #[test]
    fn test_state_buffers_cover_every_kind() {
        let sink = run(GeneratorConfig::default());
        let text = &sink.find("StateBuffers").unwrap().text;

        for kind in PrimitiveKind::ALL {
            assert!(text.contains(&format!("fun {}(buf: PacketByteBuf, value: ", kind.writer())));
            assert!(text.contains(&format!("fun {}(buf: PacketByteBuf): ", kind.reader())));
        }
        assert!(text.contains("fun readText(buf: PacketByteBuf): String {\nreturn buf.readString(32767)\n}"));
        assert!(text.contains("fun writeDate(buf: PacketByteBuf, value: Date) {\nbuf.writeLong(value.time)\n}"));
    }

    #[test]
    fn test_configured_names() {
        let config = GeneratorConfig {
            lib_package: "my.ui".to_string(),
            gui_type: "my.ui.Gui".to_string(),
            state_channel: "my-mod:sync".to_string(),
            ..GeneratorConfig::default()
        };
        let sink = run(config);

        assert_eq!(sink.units()[0].file_name, "Gui");
        assert!(sink.units().iter().all(|u| u.package_name == "my.ui"));
        assert!(
            sink.find("NipahUIScreenHandler")
                .unwrap()
                .text
                .contains("Identifier(\"my-mod\", \"sync\")")
        );
    }
}
