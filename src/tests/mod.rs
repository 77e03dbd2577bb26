mod phoneformatter_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Installs a trace level logger once per test binary.
pub(crate) fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}
