mod error_interop;
