use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_validation::Document;
use libgraphql_validation::Schema;
use libgraphql_validation::schema::SchemaBuilder;
use libgraphql_validation::validation;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Stop validating a file once this many errors have been \
             reported for it.",
        long,
    )]
    max_errors: Option<usize>,

    #[arg(
        help="Paths to one or more schema (SDL) files to validate documents \
             against.",
        long,
        num_args=1..,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn collect_file_paths(&self) -> anyhow::Result<(Vec<PathBuf>, usize)> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Failed to scan files at/under {}",
                    path.display(),
                ))?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                let has_graphql_ext = path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if has_graphql_ext {
                    log::trace!("Found GraphQL file at {path:#?}.");
                    file_paths.push(canonicalize(path)?);
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file validated as a GraphQL file -- even
        // if its file extension doesn't match one of the file extensions
        // specified in `graphql_file_exts`.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to validate {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --graphql-file-exts \
                ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
            file_paths.push(canonicalized_first_arg_path);
        }

        Ok((file_paths, num_non_graphql_files))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match SchemaBuilder::from_files(&self.schema)
            .and_then(|builder| builder.build()) {
            Ok(schema) => Arc::new(schema),
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors building schema: {e}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Built schema with {} types and {} directives.",
            schema.get_type_map().len(),
            schema.directives().len(),
        );

        let (file_paths, num_non_graphql_files) = match self.collect_file_paths() {
            Ok(found) => found,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let options = validation::ValidationOptions {
            max_errors: self.max_errors,
        };
        let tasks: Vec<_> = file_paths.iter().map(|file_path| {
            let schema = Arc::clone(&schema);
            let file_path = file_path.clone();
            let options = options.clone();
            tokio::task::spawn_blocking(move || {
                validate_file(&schema, &file_path, &options)
            })
        }).collect();

        let mut num_operations = 0;
        let mut error_lines: Vec<String> = vec![];
        for task in tasks {
            match task.await {
                Ok(Ok(report)) => {
                    num_operations += report.num_operations;
                    error_lines.extend(report.error_lines);
                },
                Ok(Err(e)) => error_lines.push(format!("{e:#}")),
                Err(e) => error_lines.push(format!("Validation task failed: {e}")),
            }
        }

        if !error_lines.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                error_lines.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {}.\n",
                "  * Skipped {}.\n",
                "  * Validated {}.",
            ),
            output_utils::GREEN_CHECK,
            output_utils::pluralize(file_paths.len(), "file", "files"),
            output_utils::pluralize(
                num_non_graphql_files,
                "non-graphql file",
                "non-graphql files",
            ),
            output_utils::pluralize(num_operations, "operation", "operations"),
        ))
    }
}

struct FileReport {
    error_lines: Vec<String>,
    num_operations: usize,
}

fn validate_file(
    schema: &Schema,
    file_path: &Path,
    options: &validation::ValidationOptions,
) -> anyhow::Result<FileReport> {
    log::debug!("Validating {file_path:#?}...");
    let source = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let document = Document::parse_executable(&source)
        .with_context(|| format!("Failed to parse {}", file_path.display()))?;

    let errors = validation::validate_with_options(
        schema,
        &document,
        &validation::specified_rules(),
        options,
    ).with_context(|| format!("Failed to validate {}", file_path.display()))?;
    log::debug!("Found {} validation errors in {file_path:#?}.", errors.len());

    Ok(FileReport {
        error_lines: errors.iter()
            .flat_map(|error| output_utils::format_validation_error(file_path, error))
            .collect(),
        num_operations: document.operations().count(),
    })
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_cmd(file_or_dir_paths: Vec<PathBuf>) -> ValidateCmd {
        ValidateCmd {
            graphql_file_exts: vec!["graphql".to_string(), ".gql".to_string()],
            max_errors: None,
            schema: vec![],
            file_or_dir_paths,
        }
    }

    #[test]
    fn collects_graphql_files_and_counts_skipped() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("nested"))?;
        std::fs::write(dir.path().join("a.graphql"), "{ a }")?;
        std::fs::write(dir.path().join("nested/b.gql"), "{ b }")?;
        std::fs::write(dir.path().join("notes.txt"), "")?;

        let (mut file_paths, num_skipped) =
            validate_cmd(vec![dir.path().to_path_buf()]).collect_file_paths()?;
        file_paths.sort();

        assert_eq!(file_paths, vec![
            canonicalize(&dir.path().join("a.graphql"))?,
            canonicalize(&dir.path().join("nested/b.gql"))?,
        ]);
        assert_eq!(num_skipped, 1);
        Ok(())
    }

    #[test]
    fn single_file_arg_is_validated_regardless_of_extension() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("query.txt");
        std::fs::write(&file_path, "{ a }")?;

        let (file_paths, num_skipped) =
            validate_cmd(vec![file_path.clone()]).collect_file_paths()?;

        assert_eq!(file_paths, vec![canonicalize(&file_path)?]);
        assert_eq!(num_skipped, 0);
        Ok(())
    }

    #[test]
    fn missing_path_is_an_error() {
        let result = validate_cmd(vec![PathBuf::from("/does/not/exist.graphql")])
            .collect_file_paths();

        assert!(result.is_err());
    }
}
