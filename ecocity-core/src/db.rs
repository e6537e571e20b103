use crate::repositories::*;

pub trait Db:
    UserRepo + PointRepo + EventRepo + PointRequestRepo + EventRequestRepo + UserTokenRepo
{
}

impl<T> Db for T where
    T: UserRepo + PointRepo + EventRepo + PointRequestRepo + EventRequestRepo + UserTokenRepo
{
}
