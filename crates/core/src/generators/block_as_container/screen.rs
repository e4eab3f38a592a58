//! Screen template

use crate::{
    config::GeneratorConfig,
    generators::{
        imports::{self, all_of},
        lib_generator::SCREEN_WRAPPER,
    },
    kgen::{Class, Field, Fun, Inherits, Param, PrimaryConstructor, Source},
    types::{GuiEvent, ValidatedInput},
};

pub fn source(input: &ValidatedInput, config: &GeneratorConfig) -> Source {
    let names = &input.names;
    let handler = &names.screen_handler;

    let draw_background = if input.gui.has_event(GuiEvent::Render) {
        "gui.render(container)\ncontainer.drawBackground(matrices, delta, mouseX, mouseY, wrapper)"
    } else {
        "container.drawBackground(matrices, delta, mouseX, mouseY, wrapper)"
    };

    let screen = Class::new(&names.screen)
        .with_primary_constructor(
            PrimaryConstructor::new()
                .with_param(Param::new("handler", handler))
                .with_param(Param::new("playerInventory", "PlayerInventory"))
                .with_param(Param::new("title", "Text")),
        )
        .with_inherits(
            Inherits::new("HandledScreen")
                .with_generics(handler)
                .with_ctor("handler, playerInventory, title"),
        )
        .with_field(Field::new("gui", "").with_default("handler.gui").private())
        .with_field(
            Field::new(
                "container",
                GeneratorConfig::simple_name(&config.container_gui_type),
            )
            .private()
            .late_init(),
        )
        .with_field(
            Field::new("wrapper", "")
                .with_default(format!(
                    "{SCREEN_WRAPPER}(
    WrappedProperty({{ width }}, {{ width = it }}),
    WrappedProperty({{ height }}, {{ height = it }}),
    WrappedProperty({{ backgroundWidth }}, {{ backgroundWidth = it }}),
    WrappedProperty({{ backgroundHeight }}, {{ backgroundHeight = it }}),
    title,
    WrappedProperty({{ titleX }}, {{ titleX = it }}),
    WrappedProperty({{ titleY }}, {{ titleY = it }}),
    WrappedProperty({{ textRenderer }}, {{ textRenderer = it }}),

    ::drawTexture,
    ::drawTextWithShadow,
    ::drawCenteredText
)"
                ))
                .private(),
        )
        .with_fun(Fun::overriding("init").with_body(
            "super.init()\n\
             titleX = (backgroundWidth - textRenderer.getWidth(title)) / 2\n\
             container = gui.makeScreen()",
        ))
        .with_fun(
            Fun::overriding("render")
                .with_param(Param::new("matrices", "MatrixStack"))
                .with_param(Param::new("mouseX", "Int"))
                .with_param(Param::new("mouseY", "Int"))
                .with_param(Param::new("delta", "Float"))
                .with_body(
                    "renderBackground(matrices)\n\
                     super.render(matrices, mouseX, mouseY, delta)\n\
                     drawMouseoverTooltip(matrices, mouseX, mouseY)",
                ),
        )
        .with_fun(
            Fun::overriding("drawBackground")
                .with_param(Param::new("matrices", "MatrixStack"))
                .with_param(Param::new("delta", "Float"))
                .with_param(Param::new("mouseX", "Int"))
                .with_param(Param::new("mouseY", "Int"))
                .with_body(draw_background),
        );

    Source::new(input.package_name(), &names.screen)
        .with_imports(imports::SCREENS.iter().copied())
        .with_import(all_of(&config.lib_package))
        .with_maker(screen)
}
