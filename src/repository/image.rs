use diesel::prelude::*;

use crate::domain::image::{Image as DomainImage, NewImage as DomainNewImage};
use crate::models::image::{Image as DbImage, NewImage as DbNewImage};
use crate::repository::{
    DieselRepository, ImageReader, ImageWriter, RepositoryError, RepositoryResult,
};

impl ImageReader for DieselRepository {
    fn list_images(&self) -> RepositoryResult<Vec<DomainImage>> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let db_images = images::table
            .order(images::id.asc())
            .load::<DbImage>(&mut conn)?;

        Ok(db_images.into_iter().map(DomainImage::from).collect())
    }

    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<DomainImage>> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let image = images::table
            .filter(images::id.eq(id))
            .first::<DbImage>(&mut conn)
            .optional()?;

        Ok(image.map(Into::into))
    }

    fn get_image_by_url(&self, url: &str) -> RepositoryResult<Option<DomainImage>> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let image = images::table
            .filter(images::url.eq(url))
            .first::<DbImage>(&mut conn)
            .optional()?;

        Ok(image.map(Into::into))
    }
}

impl ImageWriter for DieselRepository {
    fn create_image(&self, new_image: &DomainNewImage) -> RepositoryResult<DomainImage> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let insertable = DbNewImage::from(new_image);

        let created = diesel::insert_into(images::table)
            .values(&insertable)
            .get_result::<DbImage>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_image(&self, image_id: i32) -> RepositoryResult<()> {
        use crate::schema::{image_tags, images};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(image_tags::table.filter(image_tags::image_id.eq(image_id)))
                .execute(conn)?;

            let deleted =
                diesel::delete(images::table.filter(images::id.eq(image_id))).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
