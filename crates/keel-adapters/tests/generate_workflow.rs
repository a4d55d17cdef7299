//! End-to-end generator workflow over the real adapters.

use std::path::{Path, PathBuf};

use keel_adapters::{LocalFilesystem, MemoryFilesystem, SimpleRenderer};
use keel_core::{
    application::{AppService, GenerateService},
    domain::{DomainError, GeneratorKind, GeneratorRequest, Layout},
    error::KeelError,
};
use tempfile::TempDir;

fn request(kind: GeneratorKind, name: &str) -> GeneratorRequest {
    GeneratorRequest::new(kind, name).unwrap()
}

fn memory_service(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
        Layout::default(),
    )
}

#[test]
fn api_creates_model_and_controller_in_memory() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    service.generate(&request(GeneratorKind::Api, "foo"), "app").unwrap();

    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("app/api/controllers/FooController.js"),
            PathBuf::from("app/api/models/Foo.js"),
        ]
    );
    let model = fs.read_file(Path::new("app/api/models/Foo.js")).unwrap();
    assert!(model.contains("Foo"));
}

#[test]
fn api_leaves_no_model_when_controller_exists() {
    let fs = MemoryFilesystem::new().with_file("app/api/controllers/FooController.js", "mine");
    let service = memory_service(&fs);

    let err = service
        .generate(&request(GeneratorKind::Api, "foo"), "app")
        .unwrap_err();

    assert!(matches!(err, KeelError::Domain(DomainError::AlreadyExists { .. })));
    assert!(fs.read_file(Path::new("app/api/models/Foo.js")).is_none());
    assert_eq!(
        fs.read_file(Path::new("app/api/controllers/FooController.js")).as_deref(),
        Some("mine")
    );
}

#[test]
fn scaffolded_app_accepts_every_generator_on_disk() {
    let tmp = TempDir::new().unwrap();
    let apps = AppService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Layout::default(),
    );
    let root = apps.create("testApp", tmp.path()).unwrap();
    assert!(root.join("keel.toml").is_file());
    assert!(root.join("api/models").is_dir());

    let service = GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Layout::default(),
    );

    service.generate(&request(GeneratorKind::Model, "user"), &root).unwrap();
    service.generate(&request(GeneratorKind::Controller, "user"), &root).unwrap();
    service.generate(&request(GeneratorKind::Adapter, "mongo"), &root).unwrap();

    assert!(root.join("api/models/User.js").is_file());
    assert!(root.join("api/controllers/UserController.js").is_file());
    assert!(root.join("api/adapters/mongo/lib/adapter.js").is_file());
}

#[test]
fn second_run_leaves_file_byte_for_byte_unchanged() {
    let tmp = TempDir::new().unwrap();
    let service = GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Layout::default(),
    );
    let model = tmp.path().join("api/models/User.js");

    service.generate(&request(GeneratorKind::Model, "user"), tmp.path()).unwrap();
    std::fs::write(&model, "edited by hand").unwrap();

    let result = service.run(&request(GeneratorKind::Model, "User"), tmp.path());
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert_eq!(std::fs::read_to_string(&model).unwrap(), "edited by hand");
}

#[test]
fn creating_the_same_app_twice_fails() {
    let tmp = TempDir::new().unwrap();
    let apps = AppService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Layout::default(),
    );
    apps.create("blog", tmp.path()).unwrap();
    assert!(apps.create("blog", tmp.path()).is_err());
}
