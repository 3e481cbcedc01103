#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_dir_list;
    use crate::cli::{Cli, Format};
    use clap::Parser;
    use clap::error::ErrorKind;
    use modorder_config::OutputFormat;
    use std::path::PathBuf;

    fn dirs(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_parse_dir_list_splits_and_trims() {
        assert_eq!(parse_dir_list("src").unwrap().0, dirs(&["src"]));
        assert_eq!(
            parse_dir_list(" src , lib/core,tests ").unwrap().0,
            dirs(&["src", "lib/core", "tests"])
        );
    }

    #[test]
    fn test_parse_dir_list_drops_empty_entries() {
        assert_eq!(parse_dir_list(",src,,lib,").unwrap().0, dirs(&["src", "lib"]));
    }

    #[test]
    fn test_parse_dir_list_rejects_empty() {
        assert_eq!(
            parse_dir_list("").unwrap_err(),
            "requires at least one directory"
        );
        assert!(parse_dir_list(" , ,").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["modorder"]).unwrap();
        assert!(cli.dirs.is_none());
        assert!(cli.recursive_dirs.is_none());
        assert!(!cli.make);
        assert_eq!(cli.output_format(), None);

        let overrides = cli.overrides();
        assert!(overrides.scan.dirs.is_none());
        assert!(overrides.scan.recursive_dirs.is_none());
        assert!(overrides.output.format.is_none());
    }

    #[test]
    fn test_cli_both_directory_flags() {
        let cli = Cli::try_parse_from(["modorder", "-d", "a,b", "-D", "c"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.scan.dirs, Some(dirs(&["a", "b"])));
        assert_eq!(overrides.scan.recursive_dirs, Some(dirs(&["c"])));
    }

    #[test]
    fn test_cli_one_directory_flag_clears_the_other_list() {
        let cli = Cli::try_parse_from(["modorder", "-D", "src"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.scan.dirs, Some(Vec::new()));
        assert_eq!(overrides.scan.recursive_dirs, Some(dirs(&["src"])));
    }

    #[test]
    fn test_cli_directory_flag_only_once() {
        assert!(Cli::try_parse_from(["modorder", "-d", "a", "-d", "b"]).is_err());
        assert!(Cli::try_parse_from(["modorder", "-D", "a", "-D", "b"]).is_err());
    }

    #[test]
    fn test_cli_empty_directory_list_is_an_error() {
        let err = Cli::try_parse_from(["modorder", "-d", ","]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_make_flag() {
        let cli = Cli::try_parse_from(["modorder", "-m"]).unwrap();
        assert_eq!(cli.output_format(), Some(OutputFormat::Make));
    }

    #[test]
    fn test_cli_make_conflicts_with_format() {
        assert!(Cli::try_parse_from(["modorder", "-m", "--format", "json"]).is_err());
    }

    #[test]
    fn test_cli_format() {
        let cli = Cli::try_parse_from(["modorder", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(Format::Json));
        assert_eq!(cli.output_format(), Some(OutputFormat::Json));
        assert!(Cli::try_parse_from(["modorder", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["modorder", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_cli_unknown_argument() {
        let err = Cli::try_parse_from(["modorder", "--frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
