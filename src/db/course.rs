use crate::db::postgres_service::PostgresService;
use crate::types::course::{DBCourseCreate, DBCourseUpdate};
use crate::types::error::AppError;
use chrono::Utc;
use entity::course::{
    ActiveModel as CourseActive, Entity as Course, Model as CourseModel,
};
use entity::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

impl PostgresService {
    /// Full catalog, each course paired with its owner row.
    pub async fn get_all_courses(&self) -> Result<Vec<(CourseModel, Option<UserModel>)>, AppError> {
        Ok(Course::find()
            .find_also_related(entity::user::Entity)
            .all(&self.db)
            .await?)
    }

    pub async fn get_course_by_id(
        &self,
        id: &Uuid,
    ) -> Result<(CourseModel, Option<UserModel>), AppError> {
        Course::find_by_id(*id)
            .find_also_related(entity::user::Entity)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create_course(&self, payload: DBCourseCreate) -> Result<Uuid, AppError> {
        let course_id = Uuid::new_v4();
        let now = Utc::now();

        Course::insert(CourseActive {
            id: Set(course_id),
            user_id: Set(payload.user_id),
            title: Set(payload.title),
            description: Set(payload.description),
            estimated_time: Set(payload.estimated_time),
            materials_needed: Set(payload.materials_needed),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        Ok(course_id)
    }

    /// Overwrite the mutable columns of an already-fetched course. Ownership
    /// has been checked by the caller.
    pub async fn update_course(
        &self,
        course: CourseModel,
        patch: DBCourseUpdate,
    ) -> Result<(), AppError> {
        let mut am: CourseActive = course.into();
        am.title = Set(patch.title);
        am.description = Set(patch.description);
        am.estimated_time = Set(patch.estimated_time);
        am.materials_needed = Set(patch.materials_needed);
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(())
    }

    pub async fn delete_course(&self, id: &Uuid) -> Result<(), AppError> {
        let res = Course::delete_by_id(*id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
