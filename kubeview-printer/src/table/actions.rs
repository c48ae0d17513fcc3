use std::collections::BTreeMap;

use crate::component::{Confirmation, GridAction, GridActionKind};
use crate::object::ObjectIdentity;

pub const DELETE_ACTION_PATH: &str = "action/deleteObject";

/// Row action asking the backend to delete the object, behind a confirmation.
pub fn delete_action(id: &ObjectIdentity) -> GridAction {
    let payload = BTreeMap::from([
        ("namespace".to_string(), id.namespace.clone()),
        ("apiVersion".to_string(), id.api_version.clone()),
        ("kind".to_string(), id.kind.clone()),
        ("name".to_string(), id.name.clone()),
    ]);

    GridAction {
        name: "Delete".to_string(),
        action_path: DELETE_ACTION_PATH.to_string(),
        payload,
        confirmation: Some(Confirmation {
            title: format!("Delete {}", id.kind),
            body: format!(
                "Are you sure you want to delete *{}* **{}**? This action is permanent and cannot be recovered.",
                id.kind, id.name
            ),
        }),
        kind: GridActionKind::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_action_payload() {
        let action = delete_action(&ObjectIdentity {
            namespace: "default".into(),
            api_version: "apps/v1".into(),
            kind: "Deployment".into(),
            name: "web".into(),
        });

        assert_eq!(action.kind, GridActionKind::Danger);
        assert_eq!(action.payload["apiVersion"], "apps/v1");
        let confirmation = action.confirmation.unwrap();
        assert_eq!(confirmation.title, "Delete Deployment");
        assert!(confirmation.body.contains("*Deployment* **web**"));
    }
}
