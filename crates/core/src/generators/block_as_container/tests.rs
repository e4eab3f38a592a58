use super::*;
use crate::error::Error;
use crate::interfaces::SymbolInfo;
use crate::kgen::{Class, Field};
use crate::services::{CollectingDiagnostics, MemorySink, SnapshotResolver};
use crate::types::{
    AnnotationDecl, AnnotationValue, ClassDeclaration, FunctionDecl, ParamDecl, PropertyDecl,
};

const SETTINGS: &str = "net.fabricmc.fabric.api.object.builder.v1.block.FabricBlockSettings";
const ANNOTATION: &str = "nipah.minecraft.ui.annotations.BlockAsContainer";

fn container(name: &str, gui: &str, item_count: i64) -> ClassDeclaration {
    ClassDeclaration::new("my.mod", name)
        .with_primary_constructor(vec![ParamDecl::new("s", SETTINGS)])
        .with_companion(
            ClassDeclaration::new(format!("my.mod.{name}"), "Companion")
                .companion()
                .with_property(PropertyDecl::val("ID", "net.minecraft.util.Identifier")),
        )
        .with_annotation(
            AnnotationDecl::new(ANNOTATION)
                .with_argument("itemCount", AnnotationValue::Int(item_count))
                .with_argument("gui", AnnotationValue::Type(format!("my.mod.{gui}"))),
        )
        .with_super_type(format!("my.mod.Abstract{name}"))
}

fn render_gui(name: &str) -> ClassDeclaration {
    ClassDeclaration::new("my.mod", name)
        .with_super_type("nipah.minecraft.ui.lib.GUI")
        .with_function(
            FunctionDecl::new("render")
                .with_param(ParamDecl::new("container", "nipah.minecraft.ui.lib.ContainerGUI")),
        )
}

fn stateful_gui(name: &str) -> Vec<ClassDeclaration> {
    vec![
        ClassDeclaration::new("my.mod", name)
            .with_super_type("nipah.minecraft.ui.lib.GUI")
            .with_function(
                FunctionDecl::new("tick")
                    .with_param(ParamDecl::new("world", "net.minecraft.world.World"))
                    .with_param(ParamDecl::new("pos", "net.minecraft.util.math.BlockPos"))
                    .returns("kotlin.Boolean"),
            )
            .with_property(PropertyDecl::var("state", "my.mod.FurnaceState")),
        ClassDeclaration::new("my.mod", "FurnaceState")
            .with_super_type("nipah.minecraft.ui.lib.UIState")
            .with_property(PropertyDecl::var("count", "kotlin.Int"))
            .with_property(PropertyDecl::var("label", "kotlin.String")),
    ]
}

struct Round {
    continuation: Vec<SymbolRef>,
    sink: MemorySink,
    diagnostics: CollectingDiagnostics,
}

fn round(generator: &mut BlockAsContainer, resolver: &SnapshotResolver) -> Round {
    let mut sink = MemorySink::new();
    let mut diagnostics = CollectingDiagnostics::new();
    let continuation = generator.run(resolver, &mut sink, &mut diagnostics).unwrap();
    Round {
        continuation,
        sink,
        diagnostics,
    }
}

fn discovered(resolver: &SnapshotResolver) -> BlockAsContainer {
    let mut generator = BlockAsContainer::new(GeneratorConfig::default());
    generator.first_round_run(resolver, &mut CollectingDiagnostics::new());
    assert_eq!(generator.phase(), Phase::Generate);
    generator
}

#[test]
fn test_chest_yields_five_companions() {
    let resolver = SnapshotResolver::new(vec![container("Chest", "ChestGui", 4), render_gui("ChestGui")]);
    let mut generator = discovered(&resolver);

    let round = round(&mut generator, &resolver);

    assert!(round.diagnostics.is_empty());
    assert_eq!(
        round.sink.file_names(),
        vec![
            "AbstractChest",
            "ChestInventory",
            "BaseChestEntity",
            "ChestScreenHandler",
            "ChestScreen",
            "NipahUIModInitializer"
        ]
    );
    assert_eq!(round.continuation, vec![SymbolRef("my.mod.Chest".to_string())]);
    assert_eq!(generator.phase(), Phase::Recheck);

    let entity = &round.sink.find("BaseChestEntity").unwrap().text;
    assert!(entity.contains("private val items = DefaultedList.ofSize(4, ItemStack.EMPTY)"));
    let handler = &round.sink.find("ChestScreenHandler").unwrap().text;
    assert!(handler.contains("checkSize(inventory, 4)"));
    assert!(handler.contains("this(syncId, playerInventory, SimpleInventory(4))"));
}

#[test]
fn test_missing_settings_constructor_skips_only_that_input() {
    let mut broken = container("Broken", "ChestGui", 1);
    broken.primary_constructor = None;
    let resolver = SnapshotResolver::new(vec![
        broken,
        container("Chest", "ChestGui", 1),
        render_gui("ChestGui"),
    ]);
    let mut generator = discovered(&resolver);

    let round = round(&mut generator, &resolver);

    assert_eq!(round.diagnostics.len(), 1);
    assert_eq!(round.diagnostics.for_symbol("my.mod.Broken").count(), 1);
    assert!(round.sink.units().iter().all(|u| !u.file_name.contains("Broken")));
    assert!(round.sink.find("AbstractChest").is_some());
    assert_eq!(round.continuation.len(), 1);
}

#[test]
fn test_recheck_reports_missing_base_once_without_emission() {
    let mut chest = container("Chest", "ChestGui", 4);
    chest.super_types.clear();
    let resolver = SnapshotResolver::new(vec![chest, render_gui("ChestGui")]);
    let mut generator = discovered(&resolver);
    round(&mut generator, &resolver);

    let recheck = round(&mut generator, &resolver);

    assert!(recheck.sink.units().is_empty());
    assert!(recheck.continuation.is_empty());
    let diagnostics = recheck.diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location, Location::new("my.mod.Chest"));
    assert_eq!(
        diagnostics[0].message,
        "BlockAsContainer requires the inheritance of AbstractChest"
    );
    assert_eq!(generator.phase(), Phase::Finished);
}

#[test]
fn test_recheck_accepts_inherited_base() {
    let resolver = SnapshotResolver::new(vec![container("Chest", "ChestGui", 1), render_gui("ChestGui")]);
    let mut generator = discovered(&resolver);
    round(&mut generator, &resolver);

    let recheck = round(&mut generator, &resolver);
    assert!(recheck.diagnostics.is_empty());

    let after = round(&mut generator, &resolver);
    assert!(after.sink.units().is_empty());
    assert!(after.continuation.is_empty());
}

#[test]
fn test_render_only_gui_emits_no_tick_code() {
    let resolver = SnapshotResolver::new(vec![container("Chest", "ChestGui", 1), render_gui("ChestGui")]);
    let mut generator = discovered(&resolver);

    let round = round(&mut generator, &resolver);

    let entity = &round.sink.find("BaseChestEntity").unwrap().text;
    assert!(!entity.to_lowercase().contains("tick"));
    let screen = &round.sink.find("ChestScreen").unwrap().text;
    assert!(screen.contains("gui.render(container)\ncontainer.drawBackground("));
}

#[test]
fn test_ticking_state_is_pushed_and_applied() {
    let mut declarations = vec![container("Furnace", "FurnaceGui", 2)];
    declarations.extend(stateful_gui("FurnaceGui"));
    let resolver = SnapshotResolver::new(declarations);
    let mut generator = discovered(&resolver);

    let round = round(&mut generator, &resolver);
    assert!(round.diagnostics.is_empty());

    let entity = &round.sink.find("BaseFurnaceEntity").unwrap().text;
    assert!(entity.contains(", Tickable {"));
    assert!(entity.contains("if (gui.tick(currentWorld, pos)) {\nsendState(currentWorld)\n}"));
    assert!(entity.contains("StateBuffers.writeInteger(buf, gui.state.count)"));
    assert!(entity.contains("StateBuffers.writeText(buf, gui.state.label)"));

    let handler = &round.sink.find("FurnaceScreenHandler").unwrap().text;
    assert!(handler.contains(
        "override fun updateState(buf: PacketByteBuf) {\n\
         gui.state.count = StateBuffers.readInteger(buf)\n\
         gui.state.label = StateBuffers.readText(buf)\n}"
    ));
    assert!(handler.contains("override var entityId: Long = 0L"));
}

#[test]
fn test_initializer_lists_processed_inputs() {
    let resolver = SnapshotResolver::new(vec![
        container("Chest", "ChestGui", 1),
        container("Barrel", "ChestGui", 1),
        render_gui("ChestGui"),
    ]);
    let mut generator = discovered(&resolver);

    let round = round(&mut generator, &resolver);

    let initializer = round.sink.find("NipahUIModInitializer").unwrap();
    assert_eq!(initializer.package_name, "nipah.minecraft.ui.lib");
    assert!(initializer.text.contains("import my.mod.AbstractBarrel\n"));
    assert!(initializer.text.contains(
        "// Chest\nAbstractChest.init()\nBaseChestEntity.init()\nChestScreenHandler.init()\n\n// Barrel"
    ));
}

/// Sink failing for one file name
struct FailingSink {
    inner: MemorySink,
    fail_on: &'static str,
}

impl EmissionSink for FailingSink {
    fn emit(&mut self, package_name: &str, file_name: &str, text: &str) -> Result<()> {
        if file_name == self.fail_on {
            return Err(Error::EmissionError(format!("{file_name} is read-only")));
        }
        self.inner.emit(package_name, file_name, text)
    }
}

#[test]
fn test_initializer_failure_drops_processed_signal() {
    let resolver = SnapshotResolver::new(vec![container("Chest", "ChestGui", 1), render_gui("ChestGui")]);
    let mut generator = discovered(&resolver);
    let mut sink = FailingSink {
        inner: MemorySink::new(),
        fail_on: "NipahUIModInitializer",
    };
    let mut diagnostics = CollectingDiagnostics::new();

    let continuation = generator.run(&resolver, &mut sink, &mut diagnostics).unwrap();

    assert!(continuation.is_empty());
    assert_eq!(sink.inner.units().len(), 5);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.diagnostics()[0].location,
        Location::new("nipah.minecraft.ui.lib.NipahUIModInitializer")
    );
    assert!(generator.deferred().is_empty());
    assert_eq!(generator.phase(), Phase::Finished);
}

#[test]
fn test_failed_family_emission_is_reported_and_not_deferred() {
    let resolver = SnapshotResolver::new(vec![
        container("Chest", "ChestGui", 1),
        container("Barrel", "ChestGui", 1),
        render_gui("ChestGui"),
    ]);
    let mut generator = discovered(&resolver);
    let mut sink = FailingSink {
        inner: MemorySink::new(),
        fail_on: "ChestScreen",
    };
    let mut diagnostics = CollectingDiagnostics::new();

    let continuation = generator.run(&resolver, &mut sink, &mut diagnostics).unwrap();

    assert_eq!(continuation, vec![SymbolRef("my.mod.Barrel".to_string())]);
    assert_eq!(diagnostics.for_symbol("my.mod.Chest").count(), 1);
}

/// Resolver reporting every annotated symbol twice
struct RepeatingResolver(SnapshotResolver);

impl SymbolResolver for RepeatingResolver {
    fn symbols_with_annotation(&self, annotation: &str) -> Vec<std::sync::Arc<dyn SymbolInfo>> {
        let symbols = self.0.symbols_with_annotation(annotation);
        symbols.iter().chain(symbols.iter()).cloned().collect()
    }

    fn resolve_class(&self, qualified_name: &str) -> Option<std::sync::Arc<dyn SymbolInfo>> {
        self.0.resolve_class(qualified_name)
    }
}

#[test]
fn test_repeated_declaration_yields_one_family() {
    let resolver = RepeatingResolver(SnapshotResolver::new(vec![
        container("Chest", "ChestGui", 1),
        render_gui("ChestGui"),
    ]));
    let mut generator = BlockAsContainer::new(GeneratorConfig::default());
    let mut sink = MemorySink::new();
    let mut diagnostics = CollectingDiagnostics::new();

    let continuation = generator.run(&resolver, &mut sink, &mut diagnostics).unwrap();

    assert_eq!(continuation, vec![SymbolRef("my.mod.Chest".to_string())]);
    assert_eq!(sink.file_names().iter().filter(|n| **n == "AbstractChest").count(), 1);
    let initializer = sink.find("NipahUIModInitializer").unwrap();
    assert_eq!(initializer.text.matches("AbstractChest.init()").count(), 1);
}

/// Fabric templates with one unit replaced by a class holding an invalid field
struct BrokenTemplates {
    break_family: bool,
}

fn broken_unit(package_name: &str, file_name: &str) -> Source {
    Source::new(package_name, file_name)
        .with_maker(Class::new(file_name).with_field(Field::new("untyped", "")))
}

impl FamilyTemplates for BrokenTemplates {
    fn family(&self, input: &ValidatedInput, config: &GeneratorConfig) -> Vec<Source> {
        let mut units = FabricTemplates.family(input, config);
        if self.break_family {
            units[2] = broken_unit(input.package_name(), &input.names.block_entity);
        }
        units
    }

    fn initializer(&self, processed: &[ValidatedInput], config: &GeneratorConfig) -> Source {
        if self.break_family {
            FabricTemplates.initializer(processed, config)
        } else {
            broken_unit(&config.lib_package, &config.initializer_name)
        }
    }
}

#[test]
fn test_invalid_companion_template_is_fatal() {
    let resolver = SnapshotResolver::new(vec![container("Chest", "ChestGui", 1), render_gui("ChestGui")]);
    let mut generator = BlockAsContainer::with_templates(
        GeneratorConfig::default(),
        Box::new(BrokenTemplates { break_family: true }),
    );
    let mut sink = MemorySink::new();
    let mut diagnostics = CollectingDiagnostics::new();

    let result = generator.run(&resolver, &mut sink, &mut diagnostics);

    match result {
        Err(Error::InvalidFieldDefinition { field }) => assert_eq!(field, "untyped"),
        other => panic!("Expected InvalidFieldDefinition, got {other:?}"),
    }
    // nothing of the family reaches the sink
    assert!(sink.units().is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_invalid_initializer_template_is_reported() {
    let resolver = SnapshotResolver::new(vec![container("Chest", "ChestGui", 1), render_gui("ChestGui")]);
    let mut generator = BlockAsContainer::with_templates(
        GeneratorConfig::default(),
        Box::new(BrokenTemplates { break_family: false }),
    );
    let mut sink = MemorySink::new();
    let mut diagnostics = CollectingDiagnostics::new();

    let continuation = generator.run(&resolver, &mut sink, &mut diagnostics).unwrap();

    assert!(continuation.is_empty());
    assert_eq!(sink.units().len(), 5);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.diagnostics()[0].location,
        Location::new("nipah.minecraft.ui.lib.NipahUIModInitializer")
    );
    assert!(diagnostics.diagnostics()[0].message.contains("untyped"));
    assert_eq!(generator.phase(), Phase::Finished);
}

#[test]
fn test_keyword_package_is_escaped_everywhere() {
    let chest = ClassDeclaration::new("my.object", "Chest")
        .with_primary_constructor(vec![ParamDecl::new("s", SETTINGS)])
        .with_companion(
            ClassDeclaration::new("my.object.Chest", "Companion")
                .companion()
                .with_property(PropertyDecl::val("ID", "net.minecraft.util.Identifier")),
        )
        .with_annotation(
            AnnotationDecl::new(ANNOTATION)
                .with_argument("gui", AnnotationValue::Type("my.object.ChestGui".to_string())),
        );
    let gui = ClassDeclaration::new("my.object", "ChestGui")
        .with_super_type("nipah.minecraft.ui.lib.GUI")
        .with_function(FunctionDecl::new("tick").returns("kotlin.Boolean"));
    let resolver = SnapshotResolver::new(vec![chest, gui]);
    let mut generator = discovered(&resolver);

    let round = round(&mut generator, &resolver);

    assert!(round.diagnostics.is_empty());
    let abstract_block = round.sink.find("AbstractChest").unwrap();
    // the sink still sees the plain package
    assert_eq!(abstract_block.package_name, "my.object");
    assert!(abstract_block.text.starts_with("package my.`object`\n\n"));
    assert!(abstract_block.text.contains("Registry.register(Registry.BLOCK, my.`object`.Chest.ID, self)"));
    assert!(abstract_block.text.contains("val self: my.`object`.Chest = my.`object`.Chest("));
    let handler = round.sink.find("ChestScreenHandler").unwrap();
    assert!(handler.text.contains("val gui = my.`object`.ChestGui()"));
    assert!(handler.text.contains("registerExtended(my.`object`.Chest.ID)"));
    let entity = round.sink.find("BaseChestEntity").unwrap();
    assert!(entity.text.contains("private val gui = my.`object`.ChestGui()"));
    let initializer = round.sink.find("NipahUIModInitializer").unwrap();
    assert!(initializer.text.contains("import my.`object`.AbstractChest\n"));
    assert!(!initializer.text.contains("import my.object."));
}
