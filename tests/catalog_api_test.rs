//! Catalog and runner through the public API.

use std::fs;
use std::sync::Arc;

use projectwiz::catalog::{config_path_for_exe, load, load_catalog_file};
use projectwiz::host::{probe_with, HostEnvironment};
use projectwiz::runner::{substitute, InstallPolicy, RunOptions, ToolRunner};
use projectwiz::shell::{MockShell, Streams};
use projectwiz::ui::MockUI;
use projectwiz::WizError;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "dependencies": [
        {"name": "git", "check_command": "git --version",
         "install_commands": {"windows": "winget install Git.Git", "macos": "brew install git", "apt": "sudo apt install -y git"}},
        {"name": "node", "check_command": "node --version",
         "install_commands": {"windows": "winget install OpenJS.NodeJS", "macos": "brew install node", "apt": "sudo apt install -y nodejs"}}
    ],
    "categories": [
        {"name": "Web", "frameworks": [
            {"name": "React", "tools": [
                {"name": "Vite", "command": "npm create vite@latest {} -- --template react", "dependencies": ["git", "node"]},
                {"name": "Next.js", "command": "npx create-next-app {}", "dependencies": ["node"]}
            ]},
            {"name": "Vue", "tools": []}
        ]},
        {"name": "Systems", "frameworks": []}
    ]
}"#;

#[test]
fn document_order_is_preserved() {
    let catalog = load(CATALOG.as_bytes(), &HostEnvironment::linux("apt")).unwrap();

    let categories: Vec<_> = catalog.categories().iter().map(|c| &c.name).collect();
    assert_eq!(categories, ["Web", "Systems"]);

    let frameworks: Vec<_> = catalog.categories()[0]
        .frameworks
        .iter()
        .map(|f| &f.name)
        .collect();
    assert_eq!(frameworks, ["React", "Vue"]);

    let tools: Vec<_> = catalog.categories()[0].frameworks[0]
        .tools
        .iter()
        .map(|t| &t.name)
        .collect();
    assert_eq!(tools, ["Vite", "Next.js"]);
}

#[test]
fn tools_share_global_dependencies() {
    let catalog = load(CATALOG.as_bytes(), &HostEnvironment::linux("apt")).unwrap();
    let vite = catalog.find_tool("Web", "React", "Vite").unwrap();
    let node = catalog.dependency("node").unwrap();

    assert!(Arc::ptr_eq(&vite.dependencies[1], node));
    assert_eq!(node.install_command, "sudo apt install -y nodejs");
}

#[test]
fn install_command_follows_host() {
    let mac = load(CATALOG.as_bytes(), &HostEnvironment::macos()).unwrap();
    let windows = load(CATALOG.as_bytes(), &HostEnvironment::windows()).unwrap();

    assert_eq!(mac.dependency("git").unwrap().install_command, "brew install git");
    assert_eq!(
        windows.dependency("git").unwrap().install_command,
        "winget install Git.Git"
    );
}

#[test]
fn unsupported_package_manager_names_dependency() {
    let err = load(CATALOG.as_bytes(), &HostEnvironment::linux("dnf")).unwrap_err();
    assert!(err
        .to_string()
        .contains("missing installation command for dependency git"));
}

#[test]
fn load_from_disk() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    fs::write(temp.path().join("config.json"), CATALOG).unwrap();

    let path = config_path_for_exe(&bin.join("projectwiz"));
    let catalog = load_catalog_file(&path, &HostEnvironment::macos()).unwrap();

    assert_eq!(catalog.tool_count(), 2);
}

#[test]
fn missing_file_is_config_not_found() {
    let temp = TempDir::new().unwrap();
    let err =
        load_catalog_file(&temp.path().join("config.json"), &HostEnvironment::macos()).unwrap_err();
    assert!(matches!(err, WizError::ConfigNotFound { .. }));
}

#[test]
fn probe_linux_with_fake_filesystem() {
    let host = probe_with("linux", None, |p| p.to_str() == Some("/bin/pacman")).unwrap();
    assert_eq!(host.package_manager.as_deref(), Some("pacman"));

    let err = probe_with("linux", None, |_| false).unwrap_err();
    assert!(matches!(err, WizError::NoPackageManager { .. }));

    let err = probe_with("freebsd", None, |_| true).unwrap_err();
    assert!(matches!(err, WizError::UnsupportedPlatform { .. }));
}

#[test]
fn one_missing_dependency_installs_once_then_runs() {
    let catalog = load(CATALOG.as_bytes(), &HostEnvironment::linux("apt")).unwrap();
    let vite = catalog.find_tool("Web", "React", "Vite").unwrap();

    let shell = MockShell::new();
    shell.script("git --version", vec![1, 0]);
    let runner = ToolRunner::new(&shell, RunOptions::default());
    let mut ui = MockUI::new();

    let result = runner.run(vite, Some("demo"), &mut ui).unwrap();

    assert!(result.ok);
    assert_eq!(shell.count("sudo apt install -y git"), 1);
    assert!(!shell.ran("sudo apt install -y nodejs"));
    assert_eq!(
        shell.invocations_with_streams().last().unwrap(),
        &(
            "npm create vite@latest demo -- --template react".to_string(),
            Streams::Inherit
        )
    );
}

#[test]
fn lenient_policy_runs_after_failed_install() {
    let catalog = load(CATALOG.as_bytes(), &HostEnvironment::linux("apt")).unwrap();
    let next = catalog.find_tool("Web", "React", "Next.js").unwrap();

    let shell = MockShell::new();
    shell.script("node --version", vec![1]);
    shell.script("sudo apt install -y nodejs", vec![100]);
    let runner = ToolRunner::new(
        &shell,
        RunOptions {
            policy: InstallPolicy::Lenient,
            allow_unsafe_names: false,
        },
    );
    let mut ui = MockUI::new();

    let result = runner.run(next, Some("site"), &mut ui).unwrap();

    assert!(result.ok);
    assert!(shell.ran("npx create-next-app site"));
}

#[test]
fn substitute_examples() {
    assert_eq!(
        substitute("npx create-{} --ts", "{}", "demo"),
        "npx create-demo --ts"
    );
    assert_eq!(substitute("cargo new app", "{}", "x"), "cargo new app");
    assert_eq!(substitute("mv {} {}.bak", "{}", "a"), "mv a a.bak");
}

#[test]
fn sample_catalog_loads_on_every_host() {
    let sample = include_str!("../demos/config.json");
    let hosts = [
        HostEnvironment::windows(),
        HostEnvironment::macos(),
        HostEnvironment::linux("apt"),
        HostEnvironment::linux("pacman"),
        HostEnvironment::linux("dnf"),
    ];

    for host in &hosts {
        let catalog = load(sample.as_bytes(), host).unwrap();
        assert!(catalog.tool_count() > 0, "{} loaded no tools", host.describe());
    }
}
