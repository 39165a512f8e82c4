//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Internal Server Error",
        "message": "Something went wrong",
        "statusCode": 500
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "ValidationError",
        "message": "Price is required and must be a non-negative number, inStock is required and must be a boolean",
        "statusCode": 400
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid JSON body",
    content_type = "application/json",
    example = json!({
        "error": "Invalid JSON",
        "message": "Request body contains invalid JSON",
        "statusCode": 400
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "NotFoundError",
        "message": "Product with id 42 not found",
        "statusCode": 404
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing or invalid x-api-key header",
    content_type = "application/json",
    example = json!({
        "error": "AuthenticationError",
        "message": "Invalid API key",
        "statusCode": 401
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);
