use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::image_tag::{
    AttachTags, ImageTag as DomainImageTag, NewImageTag as DomainNewImageTag,
};
use crate::domain::tag::Tag as DomainTag;
use crate::models::image_tag::{ImageTag as DbImageTag, NewImageTag as DbNewImageTag};
use crate::models::tag::Tag as DbTag;
use crate::repository::{
    DieselRepository, ImageTagReader, ImageTagWriter, RepositoryError, RepositoryResult,
};

impl ImageTagReader for DieselRepository {
    fn list_tags_for_image(&self, image_id: i32) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::{image_tags, tags};

        let mut conn = self.conn()?;
        let db_tags = image_tags::table
            .inner_join(tags::table)
            .filter(image_tags::image_id.eq(image_id))
            .order(image_tags::id.asc())
            .select(DbTag::as_select())
            .load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }

    fn get_image_tag(
        &self,
        image_id: i32,
        tag_id: i32,
    ) -> RepositoryResult<Option<DomainImageTag>> {
        let mut conn = self.conn()?;
        let link = find_link(&mut conn, image_id, tag_id)?;

        Ok(link.map(Into::into))
    }
}

impl ImageTagWriter for DieselRepository {
    fn attach_tags(&self, request: &AttachTags) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::{image_tags, tags};

        let mut conn = self.conn()?;

        conn.transaction::<Vec<DomainTag>, RepositoryError, _>(|conn| {
            ensure_image_exists(conn, request.image_id)?;

            let mut added: Vec<DomainTag> = Vec::new();

            for &tag_id in &request.tag_ids {
                let tag = tags::table
                    .filter(tags::id.eq(tag_id))
                    .first::<DbTag>(conn)
                    .optional()?;

                let Some(tag) = tag else {
                    log::debug!("Skipping unknown tag {tag_id} for image {}", request.image_id);
                    continue;
                };

                if find_link(conn, request.image_id, tag_id)?.is_some() {
                    continue;
                }

                let insertable = DbNewImageTag::from(&DomainNewImageTag::new(
                    request.image_id,
                    tag_id,
                ));
                diesel::insert_into(image_tags::table)
                    .values(&insertable)
                    .execute(conn)?;

                added.push(tag.into());
            }

            Ok(added)
        })
    }

    fn delete_image_tag(&self, image_id: i32, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::image_tags;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            image_tags::table
                .filter(image_tags::image_id.eq(image_id))
                .filter(image_tags::tag_id.eq(tag_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn find_link(
    conn: &mut SqliteConnection,
    image_id: i32,
    tag_id: i32,
) -> RepositoryResult<Option<DbImageTag>> {
    use crate::schema::image_tags;

    let link = image_tags::table
        .filter(image_tags::image_id.eq(image_id))
        .filter(image_tags::tag_id.eq(tag_id))
        .first::<DbImageTag>(conn)
        .optional()?;

    Ok(link)
}

fn ensure_image_exists(conn: &mut SqliteConnection, image_id: i32) -> RepositoryResult<()> {
    use crate::schema::images;

    let found =
        select(exists(images::table.filter(images::id.eq(image_id)))).get_result::<bool>(conn)?;

    if found {
        Ok(())
    } else {
        Err(RepositoryError::NotFound)
    }
}
