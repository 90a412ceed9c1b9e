use hls_packager::component::HlsPackager;
use hls_packager::config::Config;
use hls_packager::front_end::create_front_end;
use hls_packager::init;
use hls_packager::tools::SystemToolRunner;
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();

    let config = Config::new();
    init::apply_language(config.settings.language);
    info!(
        "Language: {}, front end: {:?}",
        config.settings.language, config.settings.front_end
    );

    let front_end = create_front_end(config.settings.front_end);
    let runner = SystemToolRunner;

    HlsPackager::new(&config.settings, &runner, front_end.as_ref()).run_and_report()
}
