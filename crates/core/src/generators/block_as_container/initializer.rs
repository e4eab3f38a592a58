//! Aggregate initializer template
//!
//! One object in the library package that registers every processed
//! container and routes pushed state to the open screen handler.

use crate::{
    config::GeneratorConfig,
    generators::imports,
    kgen::{Fun, Singleton, Source},
    types::{ValidatedInput, qualify},
};

pub fn source(processed: &[ValidatedInput], config: &GeneratorConfig) -> Source {
    let handler = GeneratorConfig::simple_name(&config.screen_handler_interface);

    let init = processed
        .iter()
        .map(|input| {
            format!(
                "// {}\n{}.init()\n{}.init()\n{}.init()",
                input.simple_name(),
                input.names.abstract_block,
                input.names.block_entity,
                input.names.screen_handler
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut init_client = processed
        .iter()
        .map(|input| {
            format!(
                "// {}\n{}.initClient()",
                input.simple_name(),
                input.names.abstract_block
            )
        })
        .collect::<Vec<_>>();
    init_client.push(format!(
        "ClientPlayNetworking.registerGlobalReceiver({handler}.STATE_CHANNEL) {{ client, _, buf, _ ->
    val entityId = buf.readLong()
    val state = PacketByteBufs.copy(buf)
    client.execute {{
        val handler = client.player?.currentScreenHandler
        if (handler is {handler} && handler.entityId == entityId) {{
            handler.updateState(state)
        }}
    }}
}}"
    ));

    let initializer = Singleton::new(&config.initializer_name)
        .with_fun(Fun::new("init").with_body(init))
        .with_fun(Fun::new("initClient").with_body(init_client.join("\n\n")));

    let companions = processed.iter().flat_map(|input| {
        [
            &input.names.abstract_block,
            &input.names.block_entity,
            &input.names.screen_handler,
        ]
        .map(|name| qualify(input.package_name(), name))
    });

    Source::new(&config.lib_package, &config.initializer_name)
        .with_imports(companions)
        .with_imports(imports::INITIALIZERS.iter().copied())
        .with_maker(initializer)
}
