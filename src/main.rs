//! trackscope 命令行入口：读取本地 HTML（文件或标准输入），输出追踪器识别报告

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use trackscope::{Classifier, CustomConfigBuilder, Presenter, RawRule, SignatureCatalog, TsResult};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "trackscope", version, about = "Detect analytics, pixels and verification tags in an HTML page")]
struct Cli {
    /// HTML 文件路径，缺省时读取标准输入
    file: Option<PathBuf>,

    /// 页面地址，用于解析相对 script src
    #[arg(long)]
    base: Option<Url>,

    /// 追加的自定义规则文件（JSON 数组）
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 输出 JSON
    #[arg(long)]
    json: bool,

    /// JSON 格式化输出
    #[arg(long, requires = "json")]
    pretty: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("trackscope: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> TsResult<()> {
    let bytes = match &cli.file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    let html = String::from_utf8_lossy(&bytes);

    let mut builder = CustomConfigBuilder::new();
    if let Some(base) = cli.base {
        builder = builder.base_url(base);
    }
    let config = builder.build();

    let classifier = match &cli.rules {
        Some(path) => {
            let extra: Vec<RawRule> = serde_json::from_slice(&std::fs::read(path)?)?;
            Classifier::with_catalog(SignatureCatalog::builtin_with(&extra)?)
        }
        None => Classifier::new(),
    };

    let report = classifier.analyze_html(&html, config);
    if cli.json {
        println!("{}", report.to_json(cli.pretty)?);
    } else {
        print!("{}", Presenter::render_text(&report));
    }
    Ok(())
}
