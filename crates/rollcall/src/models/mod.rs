mod attendance;
mod responses;

pub use attendance::{AttendanceQuery, Attendee, MarkAttendance, UnmarkAttendance};
pub use responses::{AttendanceResponse, HealthResponse, MembersResponse, StatusResponse};
