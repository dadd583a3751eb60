use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Projects { filter: String },
    Matrix { project: String },
    Users { filter: String },
    Export { out: Option<PathBuf> },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config: Option<PathBuf>,
    pub command: Command,
}

pub fn usage() -> &'static str {
    "dad: D.A.D maturity matrix tool

USAGE:
  dad [--config FILE] <COMMAND>

COMMANDS:
  projects [--filter TEXT]   project cards, filtered and sorted by name
                             TEXT: free text, NN%, started, no goal, not started
  matrix <ID|NAME>           maturity matrix of one project
  users [--filter TEXT]      users, admins first
  export [--out FILE]        deployment plan as ;-separated CSV

ENV:
  RUST_LOG                   overrides [logging] level
"
}

/// Parse arguments, program name excluded
pub fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut config: Option<PathBuf> = None;
    let mut filter = String::new();
    let mut out: Option<PathBuf> = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 0usize;
    while i < args.len() {
        let a = args[i].as_str();
        match a {
            "-h" | "--help" => {
                return Ok(Cli {
                    config,
                    command: Command::Help,
                })
            }
            "--config" => {
                i += 1;
                let v = args.get(i).ok_or("--config requires FILE")?;
                config = Some(PathBuf::from(v));
            }
            "--filter" => {
                i += 1;
                let v = args.get(i).ok_or("--filter requires TEXT")?;
                filter = v.to_string();
            }
            "--out" => {
                i += 1;
                let v = args.get(i).ok_or("--out requires FILE")?;
                out = Some(PathBuf::from(v));
            }
            _ if a.starts_with("--") => return Err(format!("Unknown option {}", a)),
            _ => positional.push(a),
        }
        i += 1;
    }

    let command = match positional.as_slice() {
        [] => Command::Help,
        ["projects"] => Command::Projects { filter },
        ["users"] => Command::Users { filter },
        ["export"] => Command::Export { out },
        ["matrix", project] => Command::Matrix {
            project: project.to_string(),
        },
        ["matrix"] => return Err("matrix requires a project id or name".into()),
        [other, ..] => return Err(format!("Unknown command '{}'", other)),
    };

    Ok(Cli { config, command })
}
