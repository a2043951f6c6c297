pub mod use_cases;

pub use use_cases::{
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    get_profile::{GetProfileError, GetProfileUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
    send_verification::{SendVerificationError, SendVerificationUseCase},
    verify_reset_code::{VerifyResetCodeError, VerifyResetCodeUseCase},
};
