/// Environment variable pointing at the project config file.
pub const CONFIG_ENV: &str = "DOJO_BUILD_CONFIG";

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "dojo-build.json";

/// Action written into profiles that leave it unset.
pub const DEFAULT_ACTION: &str = "release";

/// `basePath` of every profile: the parent of the profiles directory, i.e. the source dir.
pub const PROFILE_BASE_PATH: &str = "..";

pub const PROFILES_DIR: &str = "profiles";
pub const PROFILE_SUFFIX: &str = ".profile.js";

/// Intermediate release directory created by the build tool under the destination.
pub const RELEASE_TMP_DIR: &str = "dojoBuilderTMP";

/// Build script location relative to the source directory.
pub const BUILD_SCRIPT: &str = "util/buildscripts/build.sh";
