use opsmith_core::{Complexity, GeneratedPlaybook, GenerationRequest, Structure};
use opsmith_extract::extract_tasks;
use opsmith_gen::{generate_playbook, generate_tasks, GenError, MockBackend, TextBackend};

fn request(structure: Structure) -> GenerationRequest {
    GenerationRequest {
        description: "Install nginx. Start nginx service.".to_string(),
        tasks: extract_tasks("Install nginx. Start nginx service."),
        complexity: Complexity::Basic,
        structure,
    }
}

#[tokio::test]
async fn single_structure_returns_trimmed_document() {
    let backend = MockBackend::success("\n---\n- hosts: all\n  tasks: []\n\n");
    let playbook = generate_playbook(&backend, &request(Structure::Single))
        .await
        .unwrap();
    assert_eq!(
        playbook,
        GeneratedPlaybook::Single("---\n- hosts: all\n  tasks: []".to_string())
    );
}

#[tokio::test]
async fn multi_structure_parses_marker_blob() {
    let blob = concat!(
        "# site.yml\n",
        "---\n- import_playbook: roles/main/tasks/main.yml\n",
        "# group_vars/all.yml\n",
        "---\nnginx_port: 80\n",
        "# roles/main/tasks/main.yml\n",
        "---\n- name: Install nginx\n",
    );
    let backend = MockBackend::success(blob);
    let playbook = generate_playbook(&backend, &request(Structure::Multi))
        .await
        .unwrap();
    let files = playbook.as_multi().unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(files.get("group_vars/all.yml"), Some("---\nnginx_port: 80"));
}

#[tokio::test]
async fn multi_structure_missing_required_file_fails() {
    let blob = concat!(
        "# site.yml\n",
        "---\n- hosts: all\n",
        "# roles/main/tasks/main.yml\n",
        "---\n- name: Install nginx\n",
    );
    let backend = MockBackend::success(blob);
    let err = generate_playbook(&backend, &request(Structure::Multi))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "missing required file: group_vars/all.yml");
}

#[tokio::test]
async fn multi_structure_without_markers_fails() {
    let backend = MockBackend::success("---\n- hosts: all\n");
    let err = generate_playbook(&backend, &request(Structure::Multi))
        .await
        .unwrap_err();
    assert!(matches!(err, GenError::NoFilesFound));
}

#[tokio::test]
async fn backend_failure_is_surfaced_verbatim() {
    let backend = MockBackend::failure("API quota exceeded. Please try again later.");
    let err = generate_playbook(&backend, &request(Structure::Single))
        .await
        .unwrap_err();
    match err {
        GenError::Backend(message) => {
            assert!(message.contains("API quota exceeded"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn generate_tasks_parses_fenced_json() {
    let backend = MockBackend::success(
        "```json\n[{\"type\": \"package\", \"action\": \"install\", \"target\": \"nginx\"}]\n```",
    );
    let tasks = generate_tasks(&backend, "Install nginx").await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].target, "nginx");
    assert_eq!(tasks[0].original_text, "install nginx");
}

#[tokio::test]
async fn mock_preflight_always_passes() {
    let backend = MockBackend::success("ok");
    backend.preflight_check().await.unwrap();
    assert_eq!(backend.name(), "mock");
}
