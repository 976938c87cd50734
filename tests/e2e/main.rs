// End-to-end tests for the Notecast Backend API
//
// These tests run the full axum router in-process with mock provider
// repositories and fake media tools, so no network access, API
// credentials, or ffmpeg/ffprobe installation is needed. Each test
// starts its own server on an OS-assigned port.

mod test_auth;
mod test_generate_video;
