//! Users (personnel) service

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User, UserQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        self.repository.users.list(query).await
    }

    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateUser, username: &str) -> AppResult<User> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let user = uow.insert_user(data).await?;
        uow.commit().await?;
        Ok(user)
    }

    pub async fn update(&self, id: i32, data: &UpdateUser, username: &str) -> AppResult<User> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let before = uow.user_for_update(id).await?;

        let mut after = before.clone();
        if let Some(ref full_name) = data.full_name {
            after.full_name = full_name.clone();
        }
        if let Some(ref department) = data.department {
            after.department = department.clone();
        }
        if data.personnel_number.is_some() {
            after.personnel_number = data.personnel_number.clone();
        }
        if let Some(is_blocked) = data.is_blocked {
            after.is_blocked = is_blocked;
        }

        uow.update_user(&before, &after).await?;
        uow.commit().await?;
        Ok(after)
    }

    /// Users with assignment history cannot be deleted
    pub async fn delete(&self, id: i32, username: &str) -> AppResult<()> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let user = uow.user_for_update(id).await?;

        if uow.user_has_assignments(id).await? {
            return Err(AppError::Conflict(format!(
                "User {} has assignment history and cannot be deleted",
                user.full_name
            )));
        }

        uow.delete_user(&user).await?;
        uow.commit().await?;
        Ok(())
    }
}
