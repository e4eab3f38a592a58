//! Storage entity template
//!
//! Holds the item stacks, opens the screen handler and, when the GUI ticks,
//! drives the GUI server-side and pushes its state to watching players.

use crate::{
    config::GeneratorConfig,
    generators::{
        imports::{self, all_of},
        lib_generator::STATE_BUFFERS,
    },
    kgen::{Class, CompanionObject, Field, Fun, Inherits, Param, Source, escape_path},
    types::{GuiEvent, StateSchema, ValidatedInput},
};

pub fn source(input: &ValidatedInput, config: &GeneratorConfig) -> Source {
    let names = &input.names;
    let entity = &names.block_entity;
    let ticks = input.gui.ticks();
    let sent_state = input.gui.state.as_ref().filter(|_| ticks);

    let companion = CompanionObject::new()
        .with_field(Field::new("TYPE", format!("BlockEntityType<{entity}>")).with_default(
            format!(
                "BlockEntityType.Builder.create(::{entity}, {}.self).build(null)",
                names.abstract_block
            ),
        ))
        .with_fun(Fun::new("init").with_body(format!(
            "Registry.register(Registry.BLOCK_ENTITY_TYPE, {}.ID, TYPE)",
            escape_path(&input.qualified_name)
        )));

    let mut class = Class::new(entity)
        .with_inherits(Inherits::new("BlockEntity").with_ctor("TYPE"))
        .with_inherits(Inherits::new(&names.inventory))
        .with_inherits(Inherits::new("ExtendedScreenHandlerFactory"));
    if ticks {
        class = class.with_inherits(Inherits::new("Tickable"));
    }

    class = class.with_companion(companion).with_field(
        Field::new("items", "")
            .with_default(format!(
                "DefaultedList.ofSize({}, ItemStack.EMPTY)",
                input.args.item_count
            ))
            .private(),
    );
    if ticks {
        class = class.with_field(
            Field::new("gui", "")
                .with_default(format!("{}()", escape_path(&input.gui.qualified_name)))
                .private(),
        );
    }

    class = class
        .with_fun(
            Fun::overriding("getItems")
                .returns("DefaultedList<ItemStack>")
                .with_body("return items"),
        )
        .with_fun(Fun::overriding("markDirty").with_body("super<BlockEntity>.markDirty()"))
        .with_fun(
            Fun::overriding("fromTag")
                .with_param(Param::new("state", "BlockState"))
                .with_param(Param::new("tag", "NbtCompound"))
                .with_body("super.fromTag(state, tag)\nInventories.readNbt(tag, items)"),
        )
        .with_fun(
            Fun::overriding("writeNbt")
                .with_param(Param::new("nbt", "NbtCompound"))
                .returns("NbtCompound")
                .with_body("Inventories.writeNbt(nbt, items)\nreturn super.writeNbt(nbt)"),
        )
        .with_fun(
            Fun::overriding("canPlayerUse")
                .with_param(Param::new("player", "PlayerEntity?"))
                .returns("Boolean")
                .with_body("return player != null && pos.isWithinDistance(player.pos, 4.5)"),
        )
        .with_fun(
            Fun::overriding("createMenu")
                .with_param(Param::new("syncId", "Int"))
                .with_param(Param::new("inv", "PlayerInventory"))
                .with_param(Param::new("player", "PlayerEntity"))
                .returns("ScreenHandler")
                .with_body(format!(
                    "val handler = {}(syncId, inv, this)\nhandler.entityId = pos.asLong()\nreturn handler",
                    names.screen_handler
                )),
        )
        .with_fun(
            Fun::overriding("writeScreenOpeningData")
                .with_param(Param::new("player", "ServerPlayerEntity"))
                .with_param(Param::new("buf", "PacketByteBuf"))
                .with_body("buf.writeLong(pos.asLong())"),
        )
        .with_fun(
            Fun::overriding("getDisplayName")
                .returns("Text")
                .with_body(format!("return {}.self.name", names.abstract_block)),
        );

    if ticks {
        class = class.with_fun(Fun::overriding("tick").with_body(tick_body(input, sent_state)));
    }
    if let Some(state) = sent_state {
        class = class.with_fun(
            Fun::new("sendState")
                .with_param(Param::new("world", "World"))
                .with_body(send_state_body(state, config)),
        );
    }

    let mut source = Source::new(input.package_name(), entity)
        .with_imports(imports::BLOCK_ENTITIES.iter().copied());
    if ticks {
        source = source.with_imports(imports::TICKING_BLOCK_ENTITIES.iter().copied());
    }
    if sent_state.is_some() {
        source = source
            .with_imports(imports::STATE_SENDING_BLOCK_ENTITIES.iter().copied())
            .with_import(all_of(&config.lib_package));
    }
    source.with_maker(class)
}

fn tick_body(input: &ValidatedInput, state: Option<&StateSchema>) -> String {
    let call = if input.gui.has_event(GuiEvent::TickWithInfo) {
        "gui.tick(currentWorld, pos)"
    } else {
        "gui.tick()"
    };

    let mut body = String::from("val currentWorld = world ?: return\nif (currentWorld.isClient) {\nreturn\n}\n");
    if state.is_some() {
        body.push_str(&format!("if ({call}) {{\nsendState(currentWorld)\n}}"));
    } else {
        body.push_str(call);
    }
    body
}

fn send_state_body(state: &StateSchema, config: &GeneratorConfig) -> String {
    let handler = GeneratorConfig::simple_name(&config.screen_handler_interface);
    let writes = state
        .properties
        .iter()
        .map(|p| format!("        {STATE_BUFFERS}.{}(buf, gui.state.{})\n", p.buf_writer, p.name))
        .collect::<String>();

    format!(
        "val entityId = pos.asLong()
world.players.forEach {{ player ->
    val handler = player.currentScreenHandler
    if (player is ServerPlayerEntity && handler is {handler} && handler.entityId == entityId) {{
        val buf = PacketByteBufs.create()
        buf.writeLong(entityId)
{writes}        ServerPlayNetworking.send(player, {handler}.STATE_CHANNEL, buf)
    }}
}}"
    )
}
