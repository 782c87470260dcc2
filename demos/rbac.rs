use scoped_rbac::{policy_for, Permission, Principal, Role, RoleAssignment};
use serde_json::json;

fn main() {
    // Role definitions, e.g. loaded from a database.
    let viewer = Role::new("viewer", json!({"http.GET": ["doc", "doc/list"]}));
    let editor = Role::new(
        "editor",
        json!({"http.GET": ["doc", "doc/list"], "http.PUT": "doc"}),
    );

    let assignments = vec![
        RoleAssignment::new("johndoe", viewer, "engineering"),
        RoleAssignment::new("johndoe", editor, "marketing"),
    ];

    // Build the policy for the authenticated user.
    let policy = policy_for(&Principal::User("johndoe".into()), &assignments);

    // Evaluate a request.
    let request = Permission::http("PUT", "doc");
    for context in &["engineering", "marketing"] {
        if policy.should_allow(&request, context, "johndoe") {
            println!("{} allowed in {}", request, context);
        } else {
            println!("{} denied in {}", request, context);
        }
    }
}
