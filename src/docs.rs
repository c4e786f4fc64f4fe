use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::classes::model::{Class, CreateClassDto, UpdateClassDto};
use crate::modules::parents::model::{CreateParentDto, Parent, UpdateParentDto};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class_by_id,
        crate::modules::classes::controller::update_class_full,
        crate::modules::classes::controller::update_class_partial,
        crate::modules::classes::controller::delete_class,
        crate::modules::classes::controller::restore_class,
        crate::modules::parents::controller::create_parent,
        crate::modules::parents::controller::get_parents,
        crate::modules::parents::controller::get_parent_by_id,
        crate::modules::parents::controller::update_parent_full,
        crate::modules::parents::controller::update_parent_partial,
        crate::modules::parents::controller::delete_parent,
        crate::modules::parents::controller::restore_parent,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student_by_id,
        crate::modules::students::controller::update_student_full,
        crate::modules::students::controller::update_student_partial,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::restore_student,
    ),
    components(schemas(
        ErrorResponse,
        LoginRequest,
        LoginResponse,
        Class,
        CreateClassDto,
        UpdateClassDto,
        Parent,
        CreateParentDto,
        UpdateParentDto,
        Student,
        CreateStudentDto,
        UpdateStudentDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Classes", description = "Class management"),
        (name = "Parents", description = "Parent management"),
        (name = "Students", description = "Student management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
