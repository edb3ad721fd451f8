use mockall::mock;

use super::{
    ImageReader, ImageTagReader, ImageTagWriter, ImageWriter, RepositoryResult, TagReader,
    TagWriter,
};
use crate::domain::{
    image::{Image, NewImage},
    image_tag::{AttachTags, ImageTag},
    tag::{NewTag, Tag},
};

mock! {
    pub ImageRepo {}

    impl ImageReader for ImageRepo {
        fn list_images(&self) -> RepositoryResult<Vec<Image>>;
        fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
        fn get_image_by_url(&self, url: &str) -> RepositoryResult<Option<Image>>;
    }

    impl ImageWriter for ImageRepo {
        fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
        fn delete_image(&self, image_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TagRepo {}

    impl TagReader for TagRepo {
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
        fn get_tag_by_name(&self, name: &str) -> RepositoryResult<Option<Tag>>;
    }

    impl TagWriter for TagRepo {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ImageTagRepo {}

    impl ImageTagReader for ImageTagRepo {
        fn list_tags_for_image(&self, image_id: i32) -> RepositoryResult<Vec<Tag>>;
        fn get_image_tag(&self, image_id: i32, tag_id: i32) -> RepositoryResult<Option<ImageTag>>;
    }

    impl ImageTagWriter for ImageTagRepo {
        fn attach_tags(&self, request: &AttachTags) -> RepositoryResult<Vec<Tag>>;
        fn delete_image_tag(&self, image_id: i32, tag_id: i32) -> RepositoryResult<()>;
    }
}
