use std::path::Path;

use anyhow::Result;
use microtopo::{parse_file, RoleIndex};
use serde_json::json;

use super::{prepare, GlobalOptions};
use crate::ui::json;
use crate::ui::views::roles::{render_role, render_roles};

/// List components by role. Asking for a role nobody holds fails.
pub fn cmd_roles(file: &Path, role: Option<&str>, opts: &GlobalOptions) -> Result<bool> {
    let session = prepare(file, "roles", opts, json!({ "role": role }))?;
    let document = parse_file(session.pipeline.path())?;
    let index = RoleIndex::build(&document.topology);

    let found = role.map_or(true, |r| !index.get(r).is_empty());

    if opts.json {
        match role {
            Some(r) => {
                json::emit("role", "roles", json!({ "role": r, "components": index.get(r) }))?;
            }
            None => {
                for (r, names) in &index.roles {
                    json::emit("role", "roles", json!({ "role": r, "components": names }))?;
                }
                if !index.unassigned.is_empty() {
                    json::emit(
                        "role",
                        "roles",
                        json!({ "role": null, "components": index.unassigned }),
                    )?;
                }
            }
        }
        json::emit(
            "complete",
            "roles",
            json!({ "roles": index.roles.len(), "success": found }),
        )?;
    } else {
        match role {
            Some(r) => print!("{}", render_role(&index, r)),
            None => print!("{}", render_roles(&index, &session.ui)),
        }
    }

    Ok(found)
}
