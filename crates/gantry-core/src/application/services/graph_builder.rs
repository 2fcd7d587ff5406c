//! Target graph builder - constructs every build target for a run.
//!
//! One canonical app/test pair, five fixed extension targets, a replicated
//! app/test fan-out, and a framework/test pair per generated module, all
//! wired with dependency edges and validated (uniqueness, acyclicity, test
//! fan-out) before anything is returned.
//!
//! Emission order is the order the downstream consumer sees: main app, main
//! test, fixed extensions, replicated pairs, then module pairs in generation
//! order. The order has no effect on correctness but is stable so repeated
//! runs produce identical descriptors.

use tracing::{debug, instrument};

use crate::domain::{
    graph, Dependency, GeneratorConfig, InfoPlist, ModuleSpec, PlistValue, ProductKind, TargetName,
    TargetSpec, DomainError, SOURCES_DIR, TARGETS_DIR, TESTS_DIR,
};

/// How many packages the intent and widget extensions share.
const CORE_PACKAGE_COUNT: usize = 3;

/// Builds the complete target set for one generation run.
pub struct TargetGraphBuilder<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> TargetGraphBuilder<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build and validate every target.
    ///
    /// Fails with a `DomainError` when an invariant would be violated, e.g.
    /// the caller-supplied app name colliding with a fixed extension name or
    /// a synthesized module name. Nothing touches the filesystem here.
    #[instrument(skip_all, fields(app = %self.config.app_name(), modules = modules.len()))]
    pub fn build(&self, modules: &[ModuleSpec]) -> Result<Vec<TargetSpec>, DomainError> {
        let replicas = self.config.replication_count() as usize;
        let mut targets =
            Vec::with_capacity(7 + 2 * replicas + 2 * modules.len());

        targets.push(self.main_app(modules));
        targets.push(self.main_test());
        targets.push(self.app_clip());
        targets.push(self.notification_extension());
        targets.push(self.intent_extension());
        targets.push(self.intent_ui_extension());
        targets.push(self.widget_extension());

        for index in 0..self.config.replication_count() {
            targets.push(self.replicated_app(index, modules));
            targets.push(self.replicated_test(index));
        }

        for module in modules {
            targets.push(self.framework(module));
            targets.push(self.framework_test(module));
        }

        graph::validate(&targets, self.config.allow_duplicate_bundle_ids())?;
        debug!(targets = targets.len(), "target graph validated");
        Ok(targets)
    }

    // ── Canonical app + test ──────────────────────────────────────────────────

    fn main_app(&self, modules: &[ModuleSpec]) -> TargetSpec {
        let name = self.config.app_name().clone();
        let mut dependencies = self.shared_app_dependencies(modules);
        dependencies.extend(
            Self::EXTENSIONS
                .into_iter()
                .map(|ext| Dependency::Target(TargetName::literal(ext))),
        );

        TargetSpec::new(
            name.clone(),
            ProductKind::App,
            self.config.platform(),
            self.bundle_id(name.as_str()),
        )
        .with_info_plist(Self::app_info_plist())
        .with_sources([sources_glob(&name)])
        .with_resources([resources_glob(&name)])
        .with_dependencies(dependencies)
    }

    fn main_test(&self) -> TargetSpec {
        let app = self.config.app_name();
        let name = app.suffixed("Tests");
        TargetSpec::new(
            name.clone(),
            ProductKind::UnitTests,
            self.config.platform(),
            self.bundle_id(name.as_str()),
        )
        .with_sources([tests_glob(app)])
        .with_dependencies([Dependency::Target(app.clone())])
    }

    // ── Fixed extension targets ───────────────────────────────────────────────

    const EXTENSIONS: [&'static str; 5] = [
        "AppClip",
        "NotificationServiceExtension",
        "Intent",
        "IntentUI",
        "Widget",
    ];

    fn app_clip(&self) -> TargetSpec {
        let name = TargetName::literal("AppClip");
        TargetSpec::new(
            name.clone(),
            ProductKind::AppClip,
            self.config.platform(),
            format!("{}.Clip", self.bundle_id(self.config.app_name().as_str())),
        )
        .with_info_plist(InfoPlist::File("Targets/AppClip/Configs/Info.plist".into()))
        .with_sources([format!("{TARGETS_DIR}/{name}/{SOURCES_DIR}/**")])
        .with_entitlements("Targets/AppClip/Entitlements/AppClip.entitlements")
    }

    fn notification_extension(&self) -> TargetSpec {
        self.ns_extension(
            "NotificationServiceExtension",
            "com.apple.usernotifications.service",
            "NotificationService",
            Vec::new(),
        )
    }

    fn intent_extension(&self) -> TargetSpec {
        self.ns_extension(
            "Intent",
            "com.apple.intents-service",
            "Intent",
            self.core_package_dependencies(),
        )
    }

    fn intent_ui_extension(&self) -> TargetSpec {
        // Shares the Intent extension's source tree.
        let mut target = self.ns_extension(
            "IntentUI",
            "com.apple.intents-ui-service",
            "IntentUI",
            self.core_package_dependencies(),
        );
        target.sources = vec![format!("{TARGETS_DIR}/Intent/**")];
        target
    }

    fn widget_extension(&self) -> TargetSpec {
        self.ns_extension(
            "Widget",
            "com.apple.widgetkit-extension",
            "Widget",
            self.core_package_dependencies(),
        )
    }

    /// Common shape of the NSExtension-style app extensions.
    fn ns_extension(
        &self,
        name: &'static str,
        point_identifier: &str,
        principal_class: &str,
        dependencies: Vec<Dependency>,
    ) -> TargetSpec {
        let target_name = TargetName::literal(name);
        TargetSpec::new(
            target_name.clone(),
            ProductKind::AppExtension,
            self.config.platform(),
            format!(
                "{}.{name}",
                self.bundle_id(self.config.app_name().as_str())
            ),
        )
        .with_info_plist(InfoPlist::extended([
            (
                "CFBundleDisplayName",
                PlistValue::from("$(PRODUCT_NAME)"),
            ),
            (
                "NSExtension",
                PlistValue::Dictionary(
                    [
                        (
                            "NSExtensionPointIdentifier".to_string(),
                            PlistValue::from(point_identifier),
                        ),
                        (
                            "NSExtensionPrincipalClass".to_string(),
                            PlistValue::String(format!(
                                "$(PRODUCT_MODULE_NAME).{principal_class}"
                            )),
                        ),
                    ]
                    .into(),
                ),
            ),
        ]))
        .with_sources([format!("{TARGETS_DIR}/{target_name}/**")])
        .with_dependencies(dependencies)
    }

    // ── Replicated fan-out ────────────────────────────────────────────────────

    /// A replicated app is a structurally identical sibling of the canonical
    /// app — same bundle id, plist, and globs — minus the extension-target
    /// dependencies, differing only by the numeric name suffix.
    fn replicated_app(&self, index: u32, modules: &[ModuleSpec]) -> TargetSpec {
        let app = self.config.app_name();
        TargetSpec::new(
            app.indexed(index),
            ProductKind::App,
            self.config.platform(),
            self.bundle_id(app.as_str()),
        )
        .with_info_plist(Self::app_info_plist())
        .with_sources([sources_glob(app)])
        .with_resources([resources_glob(app)])
        .with_dependencies(self.shared_app_dependencies(modules))
    }

    /// Replicated tests exercise the canonical app, exactly like the main
    /// test target; only the name differs.
    fn replicated_test(&self, index: u32) -> TargetSpec {
        let app = self.config.app_name();
        TargetSpec::new(
            app.suffixed("Tests").indexed(index),
            ProductKind::UnitTests,
            self.config.platform(),
            self.bundle_id(&format!("{app}Tests")),
        )
        .with_sources([tests_glob(app)])
        .with_dependencies([Dependency::Target(app.clone())])
    }

    // ── Per-module pairs ──────────────────────────────────────────────────────

    fn framework(&self, module: &ModuleSpec) -> TargetSpec {
        let name = module.name().clone();
        TargetSpec::new(
            name.clone(),
            ProductKind::Framework,
            self.config.platform(),
            self.bundle_id(name.as_str()),
        )
        .with_sources([sources_glob(&name)])
    }

    fn framework_test(&self, module: &ModuleSpec) -> TargetSpec {
        let framework = module.name();
        let name = framework.suffixed("Tests");
        TargetSpec::new(
            name.clone(),
            ProductKind::UnitTests,
            self.config.platform(),
            self.bundle_id(name.as_str()),
        )
        .with_sources([tests_glob(framework)])
        .with_dependencies([Dependency::Target(framework.clone())])
    }

    // ── Shared pieces ─────────────────────────────────────────────────────────

    fn bundle_id(&self, leaf: &str) -> String {
        format!("{}.{leaf}", self.config.bundle_id_prefix())
    }

    fn app_info_plist() -> InfoPlist {
        InfoPlist::extended([
            ("CFBundleShortVersionString", "1.0"),
            ("CFBundleVersion", "1"),
            ("UIMainStoryboardFile", ""),
            ("UILaunchStoryboardName", "LaunchScreen"),
        ])
    }

    /// Dependency list shared by the canonical and replicated apps: every
    /// module framework plus every external package, in input order.
    fn shared_app_dependencies(&self, modules: &[ModuleSpec]) -> Vec<Dependency> {
        modules
            .iter()
            .map(|m| Dependency::Target(m.name().clone()))
            .chain(
                self.config
                    .external_packages()
                    .iter()
                    .cloned()
                    .map(Dependency::Package),
            )
            .collect()
    }

    /// The intent and widget extensions depend on the same core packages:
    /// the first three supplied, or all of them if fewer.
    fn core_package_dependencies(&self) -> Vec<Dependency> {
        self.config
            .external_packages()
            .iter()
            .take(CORE_PACKAGE_COUNT)
            .cloned()
            .map(Dependency::Package)
            .collect()
    }
}

fn sources_glob(name: &TargetName) -> String {
    format!("{TARGETS_DIR}/{name}/{SOURCES_DIR}/**")
}

fn resources_glob(name: &TargetName) -> String {
    format!("{TARGETS_DIR}/{name}/Resources/**")
}

fn tests_glob(name: &TargetName) -> String {
    format!("{TARGETS_DIR}/{name}/{TESTS_DIR}/**")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
