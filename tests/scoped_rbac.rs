use assert_matches::assert_matches;
use scoped_rbac::{
    policy_for, Error, IriValidator, Permission, Policy, PolicyBuilder, Principal, ResourceType,
    Role, RoleAssignment, RootPolicy, SOME_CONTEXT,
};
use serde_json::json;

#[test]
fn load_and_evaluate_context_policies() {
    let tenant_a = PolicyBuilder::from_json(
        r#"{
            "http.GET": ["rbac.Role", "rbac.Role/list"],
            "http.POST": "rbac.Role"
        }"#,
    )
    .with_validator(IriValidator)
    .build()
    .expect("Unable to build policy from json.");

    let mut root = RootPolicy::new();
    root.add_policy_for_context(tenant_a, "tenant_a")
        .add_json_policy_for_context(&json!({"http.GET": "rbac.Role"}), "tenant_b");

    let role = ResourceType::new("rbac.Role", "Role", "A Role definition as a JSON resource.");
    let get = Permission::http("GET", role.iri());
    let list = Permission::http("GET", role.list_iri());
    let post = Permission::http("POST", role.iri());

    assert!(root.should_allow(&get, "tenant_a", &()));
    assert!(root.should_allow(&list, "tenant_a", &()));
    assert!(root.should_allow(&post, "tenant_a", &()));
    assert!(root.should_allow(&get, "tenant_b", &()));
    assert!(!root.should_allow(&list, "tenant_b", &()));
    assert!(!root.should_allow(&post, "tenant_b", &()));
    assert!(!root.should_allow(&get, "tenant_c", &()));
}

#[test]
fn malformed_documents_fail_closed() {
    let mut root = RootPolicy::new();
    root.add_json_policy_for_context(&json!({"read": 1, "write": null}), "ctx")
        .add_json_policy_for_context(&json!(["doc", {"nested": true}]), "ctx");

    let read = Permission::new("read", "doc");
    assert!(!root.should_allow(&read, "ctx", &()));

    assert_matches!(
        PolicyBuilder::from_json(r#"{"read": 1}"#).build(),
        Err(Error::Validation(_))
    );
}

#[test]
fn key_set_grant_overrides_nested_restriction() {
    let mut root = RootPolicy::new();
    root.add_json_policy_for_context(&json!({"read": ["doc"]}), "ctx")
        .add_json_policy_for_context(&json!(["read"]), "ctx");

    assert_eq!(
        &Policy::dict(vec![("ctx", Policy::dict(vec![("read", Policy::Allow)]))]),
        root.policy()
    );

    let read_video = Permission::new("read", "video");
    assert!(root.should_allow(&read_video, "ctx", &()));
}

#[test]
fn role_assignments_build_user_policy() {
    let editor = Role::new(
        "editor",
        json!({"http.GET": ["doc", "doc/list"], "http.PUT": "doc"}),
    );
    let assignments = vec![
        RoleAssignment::new("alice", editor.clone(), "team_a"),
        RoleAssignment::new("bob", editor, "team_b"),
    ];

    let alice = policy_for(&Principal::User("alice".into()), &assignments);
    let put = Permission::http("PUT", "doc");

    assert!(alice.should_allow(&put, "team_a", "alice"));
    assert!(alice.should_allow(&put, SOME_CONTEXT, "alice"));
    assert!(!alice.should_allow(&put, "team_b", "alice"));

    let anonymous = policy_for(&Principal::Anonymous, &assignments);
    assert!(!anonymous.should_allow(&put, "team_a", &()));
}

#[test]
fn combined_policy_serializes_to_loadable_document() {
    let mut root = RootPolicy::new();
    root.add_json_policy_for_context(&json!({"read": ["doc"]}), "a")
        .add_json_policy_for_context(&json!({"write": true}), "b");

    let document = serde_json::to_value(root.policy()).unwrap();
    assert_eq!(json!({"a": {"read": ["doc"]}, "b": {"write": true}}), document);

    let reloaded = PolicyBuilder::from_value(document).build().unwrap();
    assert_eq!(root.policy(), &reloaded);
}
