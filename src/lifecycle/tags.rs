use crate::model::Tags;

/// Tags stamped on every resource this crate manages.
pub fn default_tags() -> Tags {
    crate::model::tags([("ManagedBy", "FTL-Automation"), ("CreatedBy", "ftl-aws-tools")])
}

/// Overlays `resource` tags on `defaults`; resource values win.
pub fn merge_tags(defaults: &Tags, resource: Option<&Tags>) -> Tags {
    let mut merged = defaults.clone();
    if let Some(resource) = resource {
        merged.extend(resource.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resource_tags_win() {
        let merged = merge_tags(
            &default_tags(),
            Some(&tags([("CreatedBy", "me"), ("Env", "prod")])),
        );
        assert_eq!(
            merged,
            tags([
                ("ManagedBy", "FTL-Automation"),
                ("CreatedBy", "me"),
                ("Env", "prod")
            ])
        );
        assert_eq!(merge_tags(&default_tags(), None), default_tags());
    }
}
