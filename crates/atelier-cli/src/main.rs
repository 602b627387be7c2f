use async_trait::async_trait;
use atelier_core::{validate, AdvanceOutcome, ProfileDraft, ProfileSubmitter, SubmissionPipeline, SubmissionResult,
                   SubmitError, SubmitOutcome, WizardController};
use atelier_domain::{ProfileKind, ProfileSubmission};
use atelier_profiles::registry_for;
use atelier_rust::logging::init_logging;
use atelier_rust::AppConfig;
use log::info;

const USAGE: &str = "Uso:
  atelier profiles
  atelier steps --profile <KIND>
  atelier validate --profile <KIND> --draft <FILE.json> [--step <N>]
  atelier run --profile <KIND> --draft <FILE.json> [--reject <MSG>]";

/// Submitter de prueba: arma el payload y no lo envía a ningún lado.
struct DryRunSubmitter {
    kind: ProfileKind,
    reject: Option<String>,
}

#[async_trait]
impl ProfileSubmitter for DryRunSubmitter {
    async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionResult, SubmitError> {
        if let Some(msg) = &self.reject {
            return Ok(SubmissionResult::failed(msg.clone()));
        }
        let submission = ProfileSubmission::from_draft(self.kind, draft).map_err(|e| SubmitError::Transport(e.to_string()))?;
        let payload = serde_json::to_string_pretty(&submission.to_payload()).map_err(|e| SubmitError::Transport(e.to_string()))?;
        println!("{payload}");
        Ok(SubmissionResult::ok())
    }
}

#[derive(Default)]
struct Args {
    profile: Option<String>,
    draft: Option<String>,
    step: Option<u32>,
    reject: Option<String>,
}

fn parse_args(args: &[String]) -> Args {
    let mut out = Args::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--profile" => {
                i += 1;
                out.profile = args.get(i).cloned();
            }
            "--draft" => {
                i += 1;
                out.draft = args.get(i).cloned();
            }
            "--step" => {
                i += 1;
                out.step = args.get(i).and_then(|s| s.parse::<u32>().ok());
            }
            "--reject" => {
                i += 1;
                out.reject = args.get(i).cloned();
            }
            _ => {}
        }
        i += 1;
    }
    out
}

fn fail(code: i32, msg: impl std::fmt::Display) -> ! {
    eprintln!("[atelier] {msg}");
    std::process::exit(code);
}

fn kind_of(args: &Args) -> ProfileKind {
    let Some(raw) = args.profile.as_deref() else {
        fail(2, USAGE)
    };
    raw.parse::<ProfileKind>().unwrap_or_else(|e| fail(2, e))
}

fn load_draft(args: &Args) -> ProfileDraft {
    let Some(path) = args.draft.as_deref() else {
        fail(2, USAGE)
    };
    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| fail(3, format!("no se pudo leer {path}: {e}")));
    let value: serde_json::Value =
        serde_json::from_str(&raw).unwrap_or_else(|e| fail(3, format!("JSON inválido en {path}: {e}")));
    ProfileDraft::from_json(value).unwrap_or_else(|e| fail(3, e))
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env().unwrap_or_else(|e| fail(2, e));
    init_logging(&config.log.filter);

    let argv: Vec<String> = std::env::args().collect();
    let Some(command) = argv.get(1).map(String::as_str) else {
        fail(2, USAGE)
    };
    let args = parse_args(&argv[2..]);

    match command {
        "profiles" => {
            for kind in ProfileKind::ALL {
                println!("{kind}\t{}", kind.label());
            }
        }
        "steps" => {
            let registry = registry_for(kind_of(&args)).unwrap_or_else(|e| fail(5, e));
            let summary = serde_json::to_string_pretty(&registry.summary()).unwrap_or_else(|e| fail(5, e));
            println!("{summary}");
        }
        "validate" => {
            let registry = registry_for(kind_of(&args)).unwrap_or_else(|e| fail(5, e));
            let draft = load_draft(&args);
            let steps: Vec<u32> = match args.step {
                Some(id) => vec![id],
                None => (1..=registry.step_count()).collect(),
            };
            let mut invalid = 0;
            for id in steps {
                let errors = validate(&registry, id, &draft).unwrap_or_else(|e| fail(2, e));
                if errors.is_empty() {
                    println!("step {id}: ok");
                    continue;
                }
                invalid += 1;
                println!("step {id}:");
                for (path, message) in errors.iter() {
                    println!("  {path}: {message}");
                }
            }
            if invalid > 0 {
                std::process::exit(1);
            }
        }
        "run" => {
            let kind = kind_of(&args);
            let registry = registry_for(kind).unwrap_or_else(|e| fail(5, e));
            let mut wizard = WizardController::builder(registry).draft(load_draft(&args))
                                                                .transition_delay(config.wizard.transition_delay())
                                                                .build()
                                                                .unwrap_or_else(|e| fail(5, e));
            while !wizard.is_final_step() {
                match wizard.next().await.unwrap_or_else(|e| fail(5, e)) {
                    AdvanceOutcome::Moved { to, .. } => info!("step {to}"),
                    AdvanceOutcome::Blocked(errors) => {
                        let fields: Vec<&str> = errors.paths().collect();
                        fail(1, format!("bloqueado en el step {}: {}", wizard.current_step(), fields.join(", ")))
                    }
                    other => fail(5, format!("resultado inesperado: {other:?}")),
                }
            }
            let pipeline = SubmissionPipeline::new(DryRunSubmitter { kind,
                                                                     reject: args.reject.clone() });
            let outcome = wizard.complete(&pipeline).await.unwrap_or_else(|e| fail(5, e));
            let codes: Vec<&str> = wizard.events().iter().map(|e| e.kind.code()).collect();
            info!("events: {}", codes.join(""));
            match outcome {
                SubmitOutcome::Completed => println!("perfil completado"),
                SubmitOutcome::Failed(msg) => fail(4, msg),
                SubmitOutcome::Blocked(errors) => {
                    let fields: Vec<&str> = errors.paths().collect();
                    fail(1, format!("último step inválido: {}", fields.join(", ")))
                }
                other => fail(5, format!("resultado inesperado: {other:?}")),
            }
        }
        _ => fail(2, USAGE),
    }
}
