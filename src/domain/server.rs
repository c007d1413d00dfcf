//! Server definitions: name normalization, validation, and the startup
//! command template.

use crate::domain::error::NameError;

/// One persisted (name, startup command) pair. The command is opaque text,
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDefinition {
    pub name: String,
    pub startup_command: String,
}

/// Replace spaces with hyphens so stored keys never contain whitespace.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(' ', "-")
}

/// Validate a normalized server name.
///
/// Commas are rejected because they delimit the fields of a registry
/// record; see `infra::store`.
///
/// # Errors
///
/// Returns a [`NameError`] if the name is empty or contains a comma or
/// control character.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if let Some(ch) = name.chars().find(|c| *c == ',' || c.is_control()) {
        return Err(NameError::InvalidCharacter { ch });
    }
    Ok(())
}

/// Assemble the startup command for a server.
///
/// The command launches the `itzg/minecraft-server` image detached on the
/// standard port, auto-installing the modpack from its platform slug and
/// enforcing the configured whitelist. World data persists on the host
/// under `~/mcworlds/<name>` so restarts keep the world.
#[must_use]
pub fn startup_command(
    name: &str,
    modpack: &str,
    modpack_api_key: &str,
    whitelist: &str,
) -> String {
    format!(
        "sudo docker run -d -it -p 25565:25565 \
         -e EULA=TRUE \
         -e MOD_PLATFORM=AUTO_CURSEFORGE \
         -e CF_API_KEY={modpack_api_key} \
         -e CF_SLUG={modpack} \
         -e MEMORY=4G \
         -e ENABLE_WHITELIST=true \
         -e WHITELIST={whitelist} \
         -v ~/mcworlds/{name}:/data \
         itzg/minecraft-server:java21"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_spaces_with_hyphens() {
        assert_eq!(normalize_name("My Cool Server"), "My-Cool-Server");
        assert_eq!(normalize_name("  padded  "), "padded");
    }

    #[test]
    fn normalize_preserves_case() {
        assert_eq!(normalize_name("Cobblemon"), "Cobblemon");
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn comma_in_name_rejected() {
        assert_eq!(
            validate_name("a,b"),
            Err(NameError::InvalidCharacter { ch: ',' })
        );
    }

    #[test]
    fn plain_name_accepted() {
        assert!(validate_name("My-Server").is_ok());
    }

    #[test]
    fn startup_command_interpolates_all_fields() {
        let cmd = startup_command("skyblock", "atm9", "key123", "alice,bob");
        assert!(cmd.contains("CF_SLUG=atm9"));
        assert!(cmd.contains("CF_API_KEY=key123"));
        assert!(cmd.contains("WHITELIST=alice,bob"));
        assert!(cmd.contains("~/mcworlds/skyblock:/data"));
        assert!(cmd.contains("itzg/minecraft-server:java21"));
    }
}
