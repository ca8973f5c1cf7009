use crate::model::attendance::{
    AttendanceRecord, AttendanceSubmission, DailySummary, DateQuery, SummaryQuery,
};
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::model::user::{CreateUser, LoginRequest, PublicUser, UpdateUser};
use crate::model::working_hour::WorkingHour;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracking API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Backend

CRUD for employees and users, daily attendance recording with derived
working-hours timeliness, and a per-day present/absent summary.

- **Employees**: create, list, update, delete
- **Users**: create, read, update, delete, login (argon2-hashed credentials)
- **Attendance**: one record per employee per day, upserted; "Present"
  submissions are stamped with the server time
- **Working hours**: time-in plus an On Time / Late classification against
  a 09:01 AM cutoff, derived from each attendance submission

Built with **Actix Web** and **SQLx** on Postgres.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::user::create_user,
        crate::api::user::get_user,
        crate::api::user::update_user,
        crate::api::user::delete_user,
        crate::api::user::login,

        crate::api::attendance::update_attendance,
        crate::api::attendance::attendance_by_date,
        crate::api::attendance::all_attendance,
        crate::api::attendance::today_summary,

        crate::api::working_hours::all_working_hours
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            PublicUser,
            CreateUser,
            UpdateUser,
            LoginRequest,
            AttendanceRecord,
            AttendanceSubmission,
            DateQuery,
            SummaryQuery,
            DailySummary,
            WorkingHour
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "User", description = "User management and login APIs"),
        (name = "Attendance", description = "Attendance recording and summary APIs"),
        (name = "WorkingHours", description = "Derived working-hours APIs"),
    )
)]
pub struct ApiDoc;
