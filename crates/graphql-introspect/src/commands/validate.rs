use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_introspection::schema::TypeRegistry;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more introspection JSON files or directories \
             containing introspection JSON files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What a successfully built registry contained.
#[derive(Debug, Default)]
struct RegistryCounts {
    types: usize,
    directives: usize,
    default_values: usize,
}

impl RegistryCounts {
    fn of(registry: &TypeRegistry) -> Self {
        let param_defaults = registry.types()
            .values()
            .filter_map(|type_| {
                type_.as_object()
                    .map(|t| t.fields())
                    .or_else(|| type_.as_interface().map(|t| t.fields()))
            })
            .flat_map(|fields| fields.values())
            .flat_map(|field| field.parameters().values())
            .chain(registry.directives().values().flat_map(|d| d.parameters().values()))
            .filter(|param| param.default_value().is_some())
            .count();
        let input_field_defaults = registry.types()
            .values()
            .filter_map(|type_| type_.as_input_object())
            .flat_map(|type_| type_.fields().values())
            .filter(|field| field.default_value().is_some())
            .count();

        Self {
            types: registry.types().len(),
            directives: registry.directives().len(),
            default_values: param_defaults + input_field_defaults,
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let json_file_exts: HashSet<String> =
            self.json_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let matches_ext = path.extension()
                            .map(|ext| json_file_exts.contains(&*ext.to_string_lossy()))
                            .unwrap_or(false);
                        if matches_ext {
                            log::trace!("Found file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping file with other extension: {path:#?}.");
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file argument is validated even when its extension isn't
        // one of `--json-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --json-file-exts ({}).",
                json_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!(
            "Found {} introspection files to be validated.",
            file_paths.len(),
        );

        let mut tasks = tokio::task::JoinSet::new();
        for file_path in file_paths.iter().cloned() {
            tasks.spawn(async move {
                let result = validate_file(&file_path).await;
                (file_path, result)
            });
        }

        let mut totals = RegistryCounts::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(counts))) => {
                    totals.types += counts.types;
                    totals.directives += counts.directives;
                    totals.default_values += counts.default_values;
                },
                Ok((file_path, Err(e))) => errors.push(format!("{}: {e:#}", file_path.display())),
                Err(e) => errors.push(format!("validation task failed: {e}")),
            }
        }

        if !errors.is_empty() {
            errors.sort();
            return CommandResult::stderr(format_args!(
                "{} Introspection validation errors:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|e| format!("  * {e}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All introspection results validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-introspection files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Parsed {} default values.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            totals.types,
            totals.directives,
            totals.default_values,
        ))
    }
}

async fn validate_file(file_path: &Path) -> anyhow::Result<RegistryCounts> {
    let json = tokio::fs::read_to_string(file_path).await?;
    let registry = TypeRegistry::from_introspection_json(&json)?;
    log::debug!(
        "Built registry from {file_path:#?} with {} types.",
        registry.types().len(),
    );
    Ok(RegistryCounts::of(&registry))
}
