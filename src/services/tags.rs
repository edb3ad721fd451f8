use crate::domain::tag::Tag;
use crate::forms::tags::AddTagForm;
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every tag in insertion order.
pub fn load_tags<R>(repo: &R) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Creates a new tag unless the name is already taken.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagReader + TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_tag_by_name(&new_tag.name)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Conflict);
    }

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Deletes a tag and detaches it from every image.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::RepositoryError;
    use crate::repository::mock::MockTagRepo;

    fn sample_tag(id: i32, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn load_tags_returns_repository_rows() {
        let mut repo = MockTagRepo::new();
        repo.expect_list_tags()
            .times(1)
            .returning(|| Ok(vec![sample_tag(1, "nature"), sample_tag(2, "city")]));

        let tags = load_tags(&repo).expect("expected success");

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "nature");
    }

    #[test]
    fn create_tag_validates_and_persists() {
        let mut repo = MockTagRepo::new();
        repo.expect_get_tag_by_name()
            .times(1)
            .withf(|name| name == "Night Sky")
            .returning(|_| Ok(None));
        repo.expect_create_tag()
            .times(1)
            .withf(|new_tag| new_tag.name == "Night Sky")
            .returning(|_| Ok(sample_tag(3, "Night Sky")));

        let form = AddTagForm {
            name: Some("  Night\tSky ".to_string()),
        };

        let created = create_tag(&repo, form).expect("expected success");

        assert_eq!(created.id, 3);
        assert_eq!(created.name, "Night Sky");
    }

    #[test]
    fn create_tag_rejects_existing_name() {
        let mut repo = MockTagRepo::new();
        repo.expect_get_tag_by_name()
            .times(1)
            .returning(|name| Ok(Some(sample_tag(1, name))));
        repo.expect_create_tag().never();

        let form = AddTagForm {
            name: Some("nature".to_string()),
        };

        let result = create_tag(&repo, form);

        assert!(matches!(result, Err(ServiceError::Conflict)));
    }

    #[test]
    fn create_tag_returns_form_error() {
        let mut repo = MockTagRepo::new();
        repo.expect_get_tag_by_name().never();

        let form = AddTagForm {
            name: Some("   ".to_string()),
        };

        let result = create_tag(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn remove_tag_deletes_record() {
        let mut repo = MockTagRepo::new();
        repo.expect_delete_tag()
            .times(1)
            .withf(|tag_id| *tag_id == 4)
            .returning(|_| Ok(()));

        assert!(matches!(remove_tag(&repo, 4), Ok(())));
    }

    #[test]
    fn remove_tag_maps_missing_row() {
        let mut repo = MockTagRepo::new();
        repo.expect_delete_tag()
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(remove_tag(&repo, 4), Err(ServiceError::NotFound)));
    }
}
