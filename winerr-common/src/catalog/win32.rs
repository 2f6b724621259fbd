//! Built-in Win32 error codes (`winerror.h`), as returned by `GetLastError`.
//!
//! Sorted by value. Only the first name of an aliased value is kept.

use super::TableEntry;

pub const TABLE: &[TableEntry] = &[
    ("ERROR_SUCCESS", 0, "The operation completed successfully."),
    ("ERROR_INVALID_FUNCTION", 1, "Incorrect function."),
    ("ERROR_FILE_NOT_FOUND", 2, "The system cannot find the file specified."),
    ("ERROR_PATH_NOT_FOUND", 3, "The system cannot find the path specified."),
    ("ERROR_TOO_MANY_OPEN_FILES", 4, "The system cannot open the file."),
    ("ERROR_ACCESS_DENIED", 5, "Access is denied."),
    ("ERROR_INVALID_HANDLE", 6, "The handle is invalid."),
    ("ERROR_ARENA_TRASHED", 7, "The storage control blocks were destroyed."),
    ("ERROR_NOT_ENOUGH_MEMORY", 8, "Not enough memory resources are available to process this command."),
    ("ERROR_INVALID_BLOCK", 9, "The storage control block address is invalid."),
    ("ERROR_BAD_ENVIRONMENT", 10, "The environment is incorrect."),
    ("ERROR_BAD_FORMAT", 11, "An attempt was made to load a program with an incorrect format."),
    ("ERROR_INVALID_ACCESS", 12, "The access code is invalid."),
    ("ERROR_INVALID_DATA", 13, "The data is invalid."),
    ("ERROR_OUTOFMEMORY", 14, "Not enough storage is available to complete this operation."),
    ("ERROR_INVALID_DRIVE", 15, "The system cannot find the drive specified."),
    ("ERROR_CURRENT_DIRECTORY", 16, "The directory cannot be removed."),
    ("ERROR_NOT_SAME_DEVICE", 17, "The system cannot move the file to a different disk drive."),
    ("ERROR_NO_MORE_FILES", 18, "There are no more files."),
    ("ERROR_WRITE_PROTECT", 19, "The media is write protected."),
    ("ERROR_BAD_UNIT", 20, "The system cannot find the device specified."),
    ("ERROR_NOT_READY", 21, "The device is not ready."),
    ("ERROR_BAD_COMMAND", 22, "The device does not recognize the command."),
    ("ERROR_CRC", 23, "Data error (cyclic redundancy check)."),
    ("ERROR_BAD_LENGTH", 24, "The program issued a command but the command length is incorrect."),
    ("ERROR_SEEK", 25, "The drive cannot locate a specific area or track on the disk."),
    ("ERROR_NOT_DOS_DISK", 26, "The specified disk or diskette cannot be accessed."),
    ("ERROR_SECTOR_NOT_FOUND", 27, "The drive cannot find the sector requested."),
    ("ERROR_OUT_OF_PAPER", 28, "The printer is out of paper."),
    ("ERROR_WRITE_FAULT", 29, "The system cannot write to the specified device."),
    ("ERROR_READ_FAULT", 30, "The system cannot read from the specified device."),
    ("ERROR_GEN_FAILURE", 31, "A device attached to the system is not functioning."),
    ("ERROR_SHARING_VIOLATION", 32, "The process cannot access the file because it is being used by another process."),
    ("ERROR_LOCK_VIOLATION", 33, "The process cannot access the file because another process has locked a portion of the file."),
    ("ERROR_WRONG_DISK", 34, "The wrong diskette is in the drive."),
    ("ERROR_SHARING_BUFFER_EXCEEDED", 36, "Too many files opened for sharing."),
    ("ERROR_HANDLE_EOF", 38, "Reached the end of the file."),
    ("ERROR_HANDLE_DISK_FULL", 39, "The disk is full."),
    ("ERROR_NOT_SUPPORTED", 50, "The request is not supported."),
    ("ERROR_REM_NOT_LIST", 51, "Windows cannot find the network path."),
    ("ERROR_DUP_NAME", 52, "You were not connected because a duplicate name exists on the network."),
    ("ERROR_BAD_NETPATH", 53, "The network path was not found."),
    ("ERROR_NETWORK_BUSY", 54, "The network is busy."),
    ("ERROR_DEV_NOT_EXIST", 55, "The specified network resource or device is no longer available."),
    ("ERROR_TOO_MANY_CMDS", 56, "The network BIOS command limit has been reached."),
    ("ERROR_ADAP_HDW_ERR", 57, "A network adapter hardware error occurred."),
    ("ERROR_BAD_NET_RESP", 58, "The specified server cannot perform the requested operation."),
    ("ERROR_UNEXP_NET_ERR", 59, "An unexpected network error occurred."),
    ("ERROR_BAD_REM_ADAP", 60, "The remote adapter is not compatible."),
    ("ERROR_PRINTQ_FULL", 61, "The printer queue is full."),
    ("ERROR_NO_SPOOL_SPACE", 62, "Space to store the file waiting to be printed is not available on the server."),
    ("ERROR_PRINT_CANCELLED", 63, "Your file waiting to be printed was deleted."),
    ("ERROR_NETNAME_DELETED", 64, "The specified network name is no longer available."),
    ("ERROR_NETWORK_ACCESS_DENIED", 65, "Network access is denied."),
    ("ERROR_BAD_DEV_TYPE", 66, "The network resource type is not correct."),
    ("ERROR_BAD_NET_NAME", 67, "The network name cannot be found."),
    ("ERROR_TOO_MANY_NAMES", 68, "The name limit for the local computer network adapter card was exceeded."),
    ("ERROR_TOO_MANY_SESS", 69, "The network BIOS session limit was exceeded."),
    ("ERROR_SHARING_PAUSED", 70, "The remote server has been paused or is in the process of being started."),
    ("ERROR_REQ_NOT_ACCEP", 71, "No more connections can be made to this remote computer at this time because there are already as many connections as the computer can accept."),
    ("ERROR_REDIR_PAUSED", 72, "The specified printer or disk device has been paused."),
    ("ERROR_FILE_EXISTS", 80, "The file exists."),
    ("ERROR_CANNOT_MAKE", 82, "The directory or file cannot be created."),
    ("ERROR_FAIL_I24", 83, "Fail on INT 24."),
    ("ERROR_OUT_OF_STRUCTURES", 84, "Storage to process this request is not available."),
    ("ERROR_ALREADY_ASSIGNED", 85, "The local device name is already in use."),
    ("ERROR_INVALID_PASSWORD", 86, "The specified network password is not correct."),
    ("ERROR_INVALID_PARAMETER", 87, "The parameter is incorrect."),
    ("ERROR_NET_WRITE_FAULT", 88, "A write fault occurred on the network."),
    ("ERROR_NO_PROC_SLOTS", 89, "The system cannot start another process at this time."),
    ("ERROR_TOO_MANY_SEMAPHORES", 100, "Cannot create another system semaphore."),
    ("ERROR_EXCL_SEM_ALREADY_OWNED", 101, "The exclusive semaphore is owned by another process."),
    ("ERROR_SEM_IS_SET", 102, "The semaphore is set and cannot be closed."),
    ("ERROR_TOO_MANY_SEM_REQUESTS", 103, "The semaphore cannot be set again."),
    ("ERROR_INVALID_AT_INTERRUPT_TIME", 104, "Cannot request exclusive semaphores at interrupt time."),
    ("ERROR_SEM_OWNER_DIED", 105, "The previous ownership of this semaphore has ended."),
    ("ERROR_SEM_USER_LIMIT", 106, "Insert the diskette for drive %1."),
    ("ERROR_DISK_CHANGE", 107, "The program stopped because an alternate diskette was not inserted."),
    ("ERROR_DRIVE_LOCKED", 108, "The disk is in use or locked by another process."),
    ("ERROR_BROKEN_PIPE", 109, "The pipe has been ended."),
    ("ERROR_OPEN_FAILED", 110, "The system cannot open the device or file specified."),
    ("ERROR_BUFFER_OVERFLOW", 111, "The file name is too long."),
    ("ERROR_DISK_FULL", 112, "There is not enough space on the disk."),
    ("ERROR_NO_MORE_SEARCH_HANDLES", 113, "No more internal file identifiers are available."),
    ("ERROR_INVALID_TARGET_HANDLE", 114, "The target internal file identifier is incorrect."),
    ("ERROR_INVALID_CATEGORY", 117, "The IOCTL call made by the application program is not correct."),
    ("ERROR_INVALID_VERIFY_SWITCH", 118, "The verify-on-write switch parameter value is not correct."),
    ("ERROR_BAD_DRIVER_LEVEL", 119, "The system does not support the command requested."),
    ("ERROR_CALL_NOT_IMPLEMENTED", 120, "This function is not supported on this system."),
    ("ERROR_SEM_TIMEOUT", 121, "The semaphore timeout period has expired."),
    ("ERROR_INSUFFICIENT_BUFFER", 122, "The data area passed to a system call is too small."),
    ("ERROR_INVALID_NAME", 123, "The filename, directory name, or volume label syntax is incorrect."),
    ("ERROR_INVALID_LEVEL", 124, "The system call level is not correct."),
    ("ERROR_NO_VOLUME_LABEL", 125, "The disk has no volume label."),
    ("ERROR_MOD_NOT_FOUND", 126, "The specified module could not be found."),
    ("ERROR_PROC_NOT_FOUND", 127, "The specified procedure could not be found."),
    ("ERROR_WAIT_NO_CHILDREN", 128, "There are no child processes to wait for."),
    ("ERROR_CHILD_NOT_COMPLETE", 129, "The application cannot be run in Win32 mode."),
    ("ERROR_DIRECT_ACCESS_HANDLE", 130, "Attempt to use a file handle to an open disk partition for an operation other than raw disk I/O."),
    ("ERROR_NEGATIVE_SEEK", 131, "An attempt was made to move the file pointer before the beginning of the file."),
    ("ERROR_SEEK_ON_DEVICE", 132, "The file pointer cannot be set on the specified device or file."),
    ("ERROR_IS_JOIN_TARGET", 133, "A JOIN or SUBST command cannot be used for a drive that contains previously joined drives."),
    ("ERROR_IS_JOINED", 134, "An attempt was made to use a JOIN or SUBST command on a drive that has already been joined."),
    ("ERROR_IS_SUBSTED", 135, "An attempt was made to use a JOIN or SUBST command on a drive that has already been substituted."),
    ("ERROR_NOT_JOINED", 136, "The system tried to delete the JOIN of a drive that is not joined."),
    ("ERROR_NOT_SUBSTED", 137, "The system tried to delete the substitution of a drive that is not substituted."),
    ("ERROR_JOIN_TO_JOIN", 138, "The system tried to join a drive to a directory on a joined drive."),
    ("ERROR_SUBST_TO_SUBST", 139, "The system tried to substitute a drive to a directory on a substituted drive."),
    ("ERROR_JOIN_TO_SUBST", 140, "The system tried to join a drive to a directory on a substituted drive."),
    ("ERROR_SUBST_TO_JOIN", 141, "The system tried to SUBST a drive to a directory on a joined drive."),
    ("ERROR_BUSY_DRIVE", 142, "The system cannot perform a JOIN or SUBST at this time."),
    ("ERROR_SAME_DRIVE", 143, "The system cannot join or substitute a drive to or for a directory on the same drive."),
    ("ERROR_DIR_NOT_ROOT", 144, "The directory is not a subdirectory of the root directory."),
    ("ERROR_DIR_NOT_EMPTY", 145, "The directory is not empty."),
    ("ERROR_IS_SUBST_PATH", 146, "The path specified is being used in a substitute."),
    ("ERROR_IS_JOIN_PATH", 147, "Not enough resources are available to process this command."),
    ("ERROR_PATH_BUSY", 148, "The path specified cannot be used at this time."),
    ("ERROR_IS_SUBST_TARGET", 149, "An attempt was made to join or substitute a drive for which a directory on the drive is the target of a previous substitute."),
    ("ERROR_SYSTEM_TRACE", 150, "System trace information was not specified in your CONFIG.SYS file, or tracing is disallowed."),
    ("ERROR_INVALID_EVENT_COUNT", 151, "The number of specified semaphore events for DosMuxSemWait is not correct."),
    ("ERROR_TOO_MANY_MUXWAITERS", 152, "DosMuxSemWait did not execute; too many semaphores are already set."),
    ("ERROR_INVALID_LIST_FORMAT", 153, "The DosMuxSemWait list is not correct."),
    ("ERROR_LABEL_TOO_LONG", 154, "The volume label you entered exceeds the label character limit of the target file system."),
    ("ERROR_TOO_MANY_TCBS", 155, "Cannot create another thread."),
    ("ERROR_SIGNAL_REFUSED", 156, "The recipient process has refused the signal."),
    ("ERROR_DISCARDED", 157, "The segment is already discarded and cannot be locked."),
    ("ERROR_NOT_LOCKED", 158, "The segment is already unlocked."),
    ("ERROR_BAD_THREADID_ADDR", 159, "The address for the thread ID is not correct."),
    ("ERROR_BAD_ARGUMENTS", 160, "One or more arguments are not correct."),
    ("ERROR_BAD_PATHNAME", 161, "The specified path is invalid."),
    ("ERROR_SIGNAL_PENDING", 162, "A signal is already pending."),
    ("ERROR_MAX_THRDS_REACHED", 164, "No more threads can be created in the system."),
    ("ERROR_LOCK_FAILED", 167, "Unable to lock a region of a file."),
    ("ERROR_BUSY", 170, "The requested resource is in use."),
    ("ERROR_DEVICE_SUPPORT_IN_PROGRESS", 171, "Device's command support detection is in progress."),
    ("ERROR_CANCEL_VIOLATION", 173, "A lock request was not outstanding for the supplied cancel region."),
    ("ERROR_ATOMIC_LOCKS_NOT_SUPPORTED", 174, "The file system does not support atomic changes to the lock type."),
    ("ERROR_INVALID_SEGMENT_NUMBER", 180, "The system detected a segment number that was not correct."),
    ("ERROR_INVALID_ORDINAL", 182, "The operating system cannot run %1."),
    ("ERROR_ALREADY_EXISTS", 183, "Cannot create a file when that file already exists."),
    ("ERROR_INVALID_FLAG_NUMBER", 186, "The flag passed is not correct."),
    ("ERROR_SEM_NOT_FOUND", 187, "The specified system semaphore name was not found."),
    ("ERROR_INVALID_STARTING_CODESEG", 188, "The operating system cannot run %1."),
    ("ERROR_INVALID_STACKSEG", 189, "The operating system cannot run %1."),
    ("ERROR_INVALID_MODULETYPE", 190, "The operating system cannot run %1."),
    ("ERROR_INVALID_EXE_SIGNATURE", 191, "Cannot run %1 in Win32 mode."),
    ("ERROR_EXE_MARKED_INVALID", 192, "The operating system cannot run %1."),
    ("ERROR_BAD_EXE_FORMAT", 193, "%1 is not a valid Win32 application."),
    ("ERROR_ITERATED_DATA_EXCEEDS_64k", 194, "The operating system cannot run %1."),
    ("ERROR_INVALID_MINALLOCSIZE", 195, "The operating system cannot run %1."),
    ("ERROR_DYNLINK_FROM_INVALID_RING", 196, "The operating system cannot run this application program."),
    ("ERROR_IOPL_NOT_ENABLED", 197, "The operating system is not presently configured to run this application."),
    ("ERROR_INVALID_SEGDPL", 198, "The operating system cannot run %1."),
    ("ERROR_AUTODATASEG_EXCEEDS_64k", 199, "The operating system cannot run this application program."),
    ("ERROR_RING2SEG_MUST_BE_MOVABLE", 200, "The code segment cannot be greater than or equal to 64K."),
    ("ERROR_RELOC_CHAIN_XEEDS_SEGLIM", 201, "The operating system cannot run %1."),
    ("ERROR_INFLOOP_IN_RELOC_CHAIN", 202, "The operating system cannot run %1."),
    ("ERROR_ENVVAR_NOT_FOUND", 203, "The system could not find the environment option that was entered."),
    ("ERROR_NO_SIGNAL_SENT", 205, "No process in the command subtree has a signal handler."),
    ("ERROR_FILENAME_EXCED_RANGE", 206, "The filename or extension is too long."),
    ("ERROR_RING2_STACK_IN_USE", 207, "The ring 2 stack is in use."),
    ("ERROR_META_EXPANSION_TOO_LONG", 208, "The global filename characters, * or ?, are entered incorrectly or too many global filename characters are specified."),
    ("ERROR_INVALID_SIGNAL_NUMBER", 209, "The signal being posted is not correct."),
    ("ERROR_THREAD_1_INACTIVE", 210, "The signal handler cannot be set."),
    ("ERROR_LOCKED", 212, "The segment is locked and cannot be reallocated."),
    ("ERROR_TOO_MANY_MODULES", 214, "Too many dynamic-link modules are attached to this program or dynamic-link module."),
    ("ERROR_NESTING_NOT_ALLOWED", 215, "Cannot nest calls to LoadModule."),
    ("ERROR_EXE_MACHINE_TYPE_MISMATCH", 216, "This version of %1 is not compatible with the version of Windows you're running."),
    ("ERROR_EXE_CANNOT_MODIFY_SIGNED_BINARY", 217, "The image file %1 is signed, unable to modify."),
    ("ERROR_EXE_CANNOT_MODIFY_STRONG_SIGNED_BINARY", 218, "The image file %1 is strong signed, unable to modify."),
    ("ERROR_FILE_CHECKED_OUT", 220, "This file is checked out or locked for editing by another user."),
    ("ERROR_CHECKOUT_REQUIRED", 221, "The file must be checked out before saving changes."),
    ("ERROR_BAD_FILE_TYPE", 222, "The file type being saved or retrieved has been blocked."),
    ("ERROR_FILE_TOO_LARGE", 223, "The file size exceeds the limit allowed and cannot be saved."),
    ("ERROR_FORMS_AUTH_REQUIRED", 224, "Access Denied. Before opening files in this location, you must first add the web site to your trusted sites list."),
    ("ERROR_VIRUS_INFECTED", 225, "Operation did not complete successfully because the file contains a virus or potentially unwanted software."),
    ("ERROR_VIRUS_DELETED", 226, "This file contains a virus or potentially unwanted software and cannot be opened."),
    ("ERROR_PIPE_LOCAL", 229, "The pipe is local."),
    ("ERROR_BAD_PIPE", 230, "The pipe state is invalid."),
    ("ERROR_PIPE_BUSY", 231, "All pipe instances are busy."),
    ("ERROR_NO_DATA", 232, "The pipe is being closed."),
    ("ERROR_PIPE_NOT_CONNECTED", 233, "No process is on the other end of the pipe."),
    ("ERROR_MORE_DATA", 234, "More data is available."),
    ("ERROR_NO_WORK_DONE", 235, "The action requested resulted in no work being done."),
    ("ERROR_VC_DISCONNECTED", 240, "The session was canceled."),
    ("ERROR_INVALID_EA_NAME", 254, "The specified extended attribute name was invalid."),
    ("ERROR_EA_LIST_INCONSISTENT", 255, "The extended attributes are inconsistent."),
    ("WAIT_TIMEOUT", 258, "The wait operation timed out."),
    ("ERROR_NO_MORE_ITEMS", 259, "No more data is available."),
    ("ERROR_CANNOT_COPY", 266, "The copy functions cannot be used."),
    ("ERROR_DIRECTORY", 267, "The directory name is invalid."),
    ("ERROR_EAS_DIDNT_FIT", 275, "The extended attributes did not fit in the buffer."),
    ("ERROR_EA_FILE_CORRUPT", 276, "The extended attribute file on the mounted file system is corrupt."),
    ("ERROR_EA_TABLE_FULL", 277, "The extended attribute table file is full."),
    ("ERROR_INVALID_EA_HANDLE", 278, "The specified extended attribute handle is invalid."),
    ("ERROR_EAS_NOT_SUPPORTED", 282, "The mounted file system does not support extended attributes."),
    ("ERROR_NOT_OWNER", 288, "Attempt to release mutex not owned by caller."),
    ("ERROR_TOO_MANY_POSTS", 298, "Too many posts were made to a semaphore."),
    ("ERROR_PARTIAL_COPY", 299, "Only part of a ReadProcessMemory or WriteProcessMemory request was completed."),
    ("ERROR_OPLOCK_NOT_GRANTED", 300, "The oplock request is denied."),
    ("ERROR_INVALID_OPLOCK_PROTOCOL", 301, "An invalid oplock acknowledgment was received by the system."),
    ("ERROR_DISK_TOO_FRAGMENTED", 302, "The volume is too fragmented to complete this operation."),
    ("ERROR_DELETE_PENDING", 303, "The file cannot be opened because it is in the process of being deleted."),
    ("ERROR_INVALID_TOKEN", 315, "The token representing the data is invalid."),
    ("ERROR_MR_MID_NOT_FOUND", 317, "The system cannot find message text for message number 0x%1 in the message file for %2."),
    ("ERROR_SCOPE_NOT_FOUND", 318, "The scope specified was not found."),
    ("ERROR_FAIL_SHUTDOWN", 351, "The operation failed because a shutdown is in progress."),
    ("ERROR_FAIL_RESTART", 352, "The operation could not be completed because a restart is pending."),
    ("ERROR_INVALID_ADDRESS", 487, "Attempt to access invalid address."),
    ("ERROR_ARITHMETIC_OVERFLOW", 534, "Arithmetic result exceeded 32 bits."),
    ("ERROR_PIPE_CONNECTED", 535, "There is a process on other end of the pipe."),
    ("ERROR_PIPE_LISTENING", 536, "Waiting for a process to open the other end of the pipe."),
    ("ERROR_DEVICE_ENUMERATION_ERROR", 648, "The device enumeration failed."),
    ("ERROR_ACPI_ERROR", 669, "An error occurred in the ACPI subsystem."),
    ("ERROR_EA_ACCESS_DENIED", 994, "Access to the extended attribute was denied."),
    ("ERROR_OPERATION_ABORTED", 995, "The I/O operation has been aborted because of either a thread exit or an application request."),
    ("ERROR_IO_INCOMPLETE", 996, "Overlapped I/O event is not in a signaled state."),
    ("ERROR_IO_PENDING", 997, "Overlapped I/O operation is in progress."),
    ("ERROR_NOACCESS", 998, "Invalid access to memory location."),
    ("ERROR_SWAPERROR", 999, "Error performing inpage operation."),
    ("ERROR_STACK_OVERFLOW", 1001, "Recursion too deep; the stack overflowed."),
    ("ERROR_INVALID_MESSAGE", 1002, "The window cannot act on the sent message."),
    ("ERROR_CAN_NOT_COMPLETE", 1003, "Cannot complete this function."),
    ("ERROR_INVALID_FLAGS", 1004, "Invalid flags."),
    ("ERROR_UNRECOGNIZED_VOLUME", 1005, "The volume does not contain a recognized file system."),
    ("ERROR_FILE_INVALID", 1006, "The volume for a file has been externally altered so that the opened file is no longer valid."),
    ("ERROR_FULLSCREEN_MODE", 1007, "The requested operation cannot be performed in full-screen mode."),
    ("ERROR_NO_TOKEN", 1008, "An attempt was made to reference a token that does not exist."),
    ("ERROR_BADDB", 1009, "The configuration registry database is corrupt."),
    ("ERROR_BADKEY", 1010, "The configuration registry key is invalid."),
    ("ERROR_CANTOPEN", 1011, "The configuration registry key could not be opened."),
    ("ERROR_CANTREAD", 1012, "The configuration registry key could not be read."),
    ("ERROR_CANTWRITE", 1013, "The configuration registry key could not be written."),
    ("ERROR_REGISTRY_RECOVERED", 1014, "One of the files in the registry database had to be recovered by use of a log or alternate copy. The recovery was successful."),
    ("ERROR_REGISTRY_CORRUPT", 1015, "The registry is corrupted."),
    ("ERROR_REGISTRY_IO_FAILED", 1016, "An I/O operation initiated by the registry failed unrecoverably."),
    ("ERROR_NOT_REGISTRY_FILE", 1017, "The system has attempted to load or restore a file into the registry, but the specified file is not in a registry file format."),
    ("ERROR_KEY_DELETED", 1018, "Illegal operation attempted on a registry key that has been marked for deletion."),
    ("ERROR_NO_LOG_SPACE", 1019, "System could not allocate the required space in a registry log."),
    ("ERROR_KEY_HAS_CHILDREN", 1020, "Cannot create a symbolic link in a registry key that already has subkeys or values."),
    ("ERROR_CHILD_MUST_BE_VOLATILE", 1021, "Cannot create a stable subkey under a volatile parent key."),
    ("ERROR_NOTIFY_ENUM_DIR", 1022, "A notify change request is being completed and the information is not being returned in the caller's buffer."),
    ("ERROR_DEPENDENT_SERVICES_RUNNING", 1051, "A stop control has been sent to a service that other running services are dependent on."),
    ("ERROR_INVALID_SERVICE_CONTROL", 1052, "The requested control is not valid for this service."),
    ("ERROR_SERVICE_REQUEST_TIMEOUT", 1053, "The service did not respond to the start or control request in a timely fashion."),
    ("ERROR_SERVICE_NO_THREAD", 1054, "A thread could not be created for the service."),
    ("ERROR_SERVICE_DATABASE_LOCKED", 1055, "The service database is locked."),
    ("ERROR_SERVICE_ALREADY_RUNNING", 1056, "An instance of the service is already running."),
    ("ERROR_INVALID_SERVICE_ACCOUNT", 1057, "The account name is invalid or does not exist, or the password is invalid for the account name specified."),
    ("ERROR_SERVICE_DISABLED", 1058, "The service cannot be started, either because it is disabled or because it has no enabled devices associated with it."),
    ("ERROR_CIRCULAR_DEPENDENCY", 1059, "Circular service dependency was specified."),
    ("ERROR_SERVICE_DOES_NOT_EXIST", 1060, "The specified service does not exist as an installed service."),
    ("ERROR_SERVICE_CANNOT_ACCEPT_CTRL", 1061, "The service cannot accept control messages at this time."),
    ("ERROR_SERVICE_NOT_ACTIVE", 1062, "The service has not been started."),
    ("ERROR_FAILED_SERVICE_CONTROLLER_CONNECT", 1063, "The service process could not connect to the service controller."),
    ("ERROR_EXCEPTION_IN_SERVICE", 1064, "An exception occurred in the service when handling the control request."),
    ("ERROR_DATABASE_DOES_NOT_EXIST", 1065, "The database specified does not exist."),
    ("ERROR_SERVICE_SPECIFIC_ERROR", 1066, "The service has returned a service-specific error code."),
    ("ERROR_PROCESS_ABORTED", 1067, "The process terminated unexpectedly."),
    ("ERROR_SERVICE_DEPENDENCY_FAIL", 1068, "The dependency service or group failed to start."),
    ("ERROR_SERVICE_LOGON_FAILED", 1069, "The service did not start due to a logon failure."),
    ("ERROR_SERVICE_START_HANG", 1070, "After starting, the service hung in a start-pending state."),
    ("ERROR_INVALID_SERVICE_LOCK", 1071, "The specified service database lock is invalid."),
    ("ERROR_SERVICE_MARKED_FOR_DELETE", 1072, "The specified service has been marked for deletion."),
    ("ERROR_SERVICE_EXISTS", 1073, "The specified service already exists."),
    ("ERROR_ALREADY_RUNNING_LKG", 1074, "The system is currently running with the last-known-good configuration."),
    ("ERROR_SERVICE_DEPENDENCY_DELETED", 1075, "The dependency service does not exist or has been marked for deletion."),
    ("ERROR_BOOT_ALREADY_ACCEPTED", 1076, "The current boot has already been accepted for use as the last-known-good control set."),
    ("ERROR_SERVICE_NEVER_STARTED", 1077, "No attempts to start the service have been made since the last boot."),
    ("ERROR_DUPLICATE_SERVICE_NAME", 1078, "The name is already in use as either a service name or a service display name."),
    ("ERROR_DIFFERENT_SERVICE_ACCOUNT", 1079, "The account specified for this service is different from the account specified for other services running in the same process."),
    ("ERROR_END_OF_MEDIA", 1100, "The physical end of the tape has been reached."),
    ("ERROR_FILEMARK_DETECTED", 1101, "A tape access reached a filemark."),
    ("ERROR_BEGINNING_OF_MEDIA", 1102, "The beginning of the tape or a partition was encountered."),
    ("ERROR_SETMARK_DETECTED", 1103, "A tape access reached the end of a set of files."),
    ("ERROR_NO_DATA_DETECTED", 1104, "No more data is on the tape."),
    ("ERROR_PARTITION_FAILURE", 1105, "Tape could not be partitioned."),
    ("ERROR_INVALID_BLOCK_LENGTH", 1106, "When accessing a new tape of a multivolume partition, the current block size is incorrect."),
    ("ERROR_DEVICE_NOT_PARTITIONED", 1107, "Tape partition information could not be found when loading a tape."),
    ("ERROR_UNABLE_TO_LOCK_MEDIA", 1108, "Unable to lock the media eject mechanism."),
    ("ERROR_UNABLE_TO_UNLOAD_MEDIA", 1109, "Unable to unload the media."),
    ("ERROR_MEDIA_CHANGED", 1110, "The media in the drive may have changed."),
    ("ERROR_BUS_RESET", 1111, "The I/O bus was reset."),
    ("ERROR_NO_MEDIA_IN_DRIVE", 1112, "No media in drive."),
    ("ERROR_NO_UNICODE_TRANSLATION", 1113, "No mapping for the Unicode character exists in the target multi-byte code page."),
    ("ERROR_DLL_INIT_FAILED", 1114, "A dynamic link library (DLL) initialization routine failed."),
    ("ERROR_SHUTDOWN_IN_PROGRESS", 1115, "A system shutdown is in progress."),
    ("ERROR_NO_SHUTDOWN_IN_PROGRESS", 1116, "Unable to abort the system shutdown because no shutdown was in progress."),
    ("ERROR_IO_DEVICE", 1117, "The request could not be performed because of an I/O device error."),
    ("ERROR_SERIAL_NO_DEVICE", 1118, "No serial device was successfully initialized. The serial driver will unload."),
    ("ERROR_IRQ_BUSY", 1119, "Unable to open a device that was sharing an interrupt request (IRQ) with other devices."),
    ("ERROR_MORE_WRITES", 1120, "A serial I/O operation was completed by another write to the serial port."),
    ("ERROR_COUNTER_TIMEOUT", 1121, "A serial I/O operation completed because the timeout period expired."),
    ("ERROR_FLOPPY_ID_MARK_NOT_FOUND", 1122, "No ID address mark was found on the floppy disk."),
    ("ERROR_FLOPPY_WRONG_CYLINDER", 1123, "Mismatch between the floppy disk sector ID field and the floppy disk controller track address."),
    ("ERROR_FLOPPY_UNKNOWN_ERROR", 1124, "The floppy disk controller reported an error that is not recognized by the floppy disk driver."),
    ("ERROR_FLOPPY_BAD_REGISTERS", 1125, "The floppy disk controller returned inconsistent results in its registers."),
    ("ERROR_DISK_RECALIBRATE_FAILED", 1126, "While accessing the hard disk, a recalibrate operation failed, even after retries."),
    ("ERROR_DISK_OPERATION_FAILED", 1127, "While accessing the hard disk, a disk operation failed even after retries."),
    ("ERROR_DISK_RESET_FAILED", 1128, "While accessing the hard disk, a disk controller reset was needed, but that also failed."),
    ("ERROR_EOM_OVERFLOW", 1129, "Physical end of tape encountered."),
    ("ERROR_NOT_ENOUGH_SERVER_MEMORY", 1130, "Not enough server memory resources are available to process this command."),
    ("ERROR_POSSIBLE_DEADLOCK", 1131, "A potential deadlock condition has been detected."),
    ("ERROR_MAPPED_ALIGNMENT", 1132, "The base address or the file offset specified does not have the proper alignment."),
    ("ERROR_SET_POWER_STATE_VETOED", 1140, "An attempt to change the system power state was vetoed by another application or driver."),
    ("ERROR_SET_POWER_STATE_FAILED", 1141, "The system BIOS failed an attempt to change the system power state."),
    ("ERROR_TOO_MANY_LINKS", 1142, "An attempt was made to create more links on a file than the file system supports."),
    ("ERROR_OLD_WIN_VERSION", 1150, "The specified program requires a newer version of Windows."),
    ("ERROR_APP_WRONG_OS", 1151, "The specified program is not a Windows or MS-DOS program."),
    ("ERROR_SINGLE_INSTANCE_APP", 1152, "Cannot start more than one instance of the specified program."),
    ("ERROR_RMODE_APP", 1153, "The specified program was written for an earlier version of Windows."),
    ("ERROR_INVALID_DLL", 1154, "One of the library files needed to run this application is damaged."),
    ("ERROR_NO_ASSOCIATION", 1155, "No application is associated with the specified file for this operation."),
    ("ERROR_DDE_FAIL", 1156, "An error occurred in sending the command to the application."),
    ("ERROR_DLL_NOT_FOUND", 1157, "One of the library files needed to run this application cannot be found."),
    ("ERROR_NO_MORE_USER_HANDLES", 1158, "The current process has used all of its system allowance of handles for Window Manager objects."),
    ("ERROR_MESSAGE_SYNC_ONLY", 1159, "The message can be used only with synchronous operations."),
    ("ERROR_SOURCE_ELEMENT_EMPTY", 1160, "The indicated source element has no media."),
    ("ERROR_DESTINATION_ELEMENT_FULL", 1161, "The indicated destination element already contains media."),
    ("ERROR_ILLEGAL_ELEMENT_ADDRESS", 1162, "The indicated element does not exist."),
    ("ERROR_MAGAZINE_NOT_PRESENT", 1163, "The indicated element is part of a magazine that is not present."),
    ("ERROR_DEVICE_REINITIALIZATION_NEEDED", 1164, "The indicated device requires reinitialization due to hardware errors."),
    ("ERROR_DEVICE_REQUIRES_CLEANING", 1165, "The device has indicated that cleaning is required before further operations are attempted."),
    ("ERROR_DEVICE_DOOR_OPEN", 1166, "The device has indicated that its door is open."),
    ("ERROR_DEVICE_NOT_CONNECTED", 1167, "The device is not connected."),
    ("ERROR_NOT_FOUND", 1168, "Element not found."),
    ("ERROR_NO_MATCH", 1169, "There was no match for the specified key in the index."),
    ("ERROR_SET_NOT_FOUND", 1170, "The property set specified does not exist on the object."),
    ("ERROR_POINT_NOT_FOUND", 1171, "The point passed to GetMouseMovePoints is not in the buffer."),
    ("ERROR_NO_TRACKING_SERVICE", 1172, "The tracking (workstation) service is not running."),
    ("ERROR_NO_VOLUME_ID", 1173, "The Volume ID could not be found."),
    ("ERROR_UNABLE_TO_REMOVE_REPLACED", 1175, "Unable to remove the file to be replaced."),
    ("ERROR_UNABLE_TO_MOVE_REPLACEMENT", 1176, "Unable to move the replacement file to the file to be replaced."),
    ("ERROR_JOURNAL_DELETE_IN_PROGRESS", 1178, "The volume change journal is being deleted."),
    ("ERROR_JOURNAL_NOT_ACTIVE", 1179, "The volume change journal is not active."),
    ("ERROR_POTENTIAL_FILE_FOUND", 1180, "A file was found, but it may not be the correct file."),
    ("ERROR_JOURNAL_ENTRY_DELETED", 1181, "The journal entry has been deleted from the journal."),
    ("ERROR_SHUTDOWN_IS_SCHEDULED", 1190, "A system shutdown has already been scheduled."),
    ("ERROR_SHUTDOWN_USERS_LOGGED_ON", 1191, "The system shutdown cannot be initiated because there are other users logged on to the computer."),
    ("ERROR_BAD_DEVICE", 1200, "The specified device name is invalid."),
    ("ERROR_CONNECTION_UNAVAIL", 1201, "The device is not currently connected but it is a remembered connection."),
    ("ERROR_DEVICE_ALREADY_REMEMBERED", 1202, "The local device name has a remembered connection to another network resource."),
    ("ERROR_NO_NET_OR_BAD_PATH", 1203, "The network path was either typed incorrectly, does not exist, or the network provider is not currently available."),
    ("ERROR_BAD_PROVIDER", 1204, "The specified network provider name is invalid."),
    ("ERROR_CANNOT_OPEN_PROFILE", 1205, "Unable to open the network connection profile."),
    ("ERROR_BAD_PROFILE", 1206, "The network connection profile is corrupted."),
    ("ERROR_NOT_CONTAINER", 1207, "Cannot enumerate a noncontainer."),
    ("ERROR_EXTENDED_ERROR", 1208, "An extended error has occurred."),
    ("ERROR_INVALID_GROUPNAME", 1209, "The format of the specified group name is invalid."),
    ("ERROR_INVALID_COMPUTERNAME", 1210, "The format of the specified computer name is invalid."),
    ("ERROR_INVALID_EVENTNAME", 1211, "The format of the specified event name is invalid."),
    ("ERROR_INVALID_DOMAINNAME", 1212, "The format of the specified domain name is invalid."),
    ("ERROR_INVALID_SERVICENAME", 1213, "The format of the specified service name is invalid."),
    ("ERROR_INVALID_NETNAME", 1214, "The format of the specified network name is invalid."),
    ("ERROR_INVALID_SHARENAME", 1215, "The format of the specified share name is invalid."),
    ("ERROR_INVALID_PASSWORDNAME", 1216, "The format of the specified password is invalid."),
    ("ERROR_INVALID_MESSAGENAME", 1217, "The format of the specified message name is invalid."),
    ("ERROR_INVALID_MESSAGEDEST", 1218, "The format of the specified message destination is invalid."),
    ("ERROR_SESSION_CREDENTIAL_CONFLICT", 1219, "Multiple connections to a server or shared resource by the same user, using more than one user name, are not allowed."),
    ("ERROR_REMOTE_SESSION_LIMIT_EXCEEDED", 1220, "An attempt was made to establish a session to a network server, but there are already too many sessions established to that server."),
    ("ERROR_DUP_DOMAINNAME", 1221, "The workgroup or domain name is already in use by another computer on the network."),
    ("ERROR_NO_NETWORK", 1222, "The network is not present or not started."),
    ("ERROR_CANCELLED", 1223, "The operation was canceled by the user."),
    ("ERROR_USER_MAPPED_FILE", 1224, "The requested operation cannot be performed on a file with a user-mapped section open."),
    ("ERROR_CONNECTION_REFUSED", 1225, "The remote computer refused the network connection."),
    ("ERROR_GRACEFUL_DISCONNECT", 1226, "The network connection was gracefully closed."),
    ("ERROR_ADDRESS_ALREADY_ASSOCIATED", 1227, "The network transport endpoint already has an address associated with it."),
    ("ERROR_ADDRESS_NOT_ASSOCIATED", 1228, "An address has not yet been associated with the network endpoint."),
    ("ERROR_CONNECTION_INVALID", 1229, "An operation was attempted on a nonexistent network connection."),
    ("ERROR_CONNECTION_ACTIVE", 1230, "An invalid operation was attempted on an active network connection."),
    ("ERROR_NETWORK_UNREACHABLE", 1231, "The network location cannot be reached."),
    ("ERROR_HOST_UNREACHABLE", 1232, "The network location cannot be reached."),
    ("ERROR_PROTOCOL_UNREACHABLE", 1233, "The network location cannot be reached."),
    ("ERROR_PORT_UNREACHABLE", 1234, "No service is operating at the destination network endpoint on the remote system."),
    ("ERROR_REQUEST_ABORTED", 1235, "The request was aborted."),
    ("ERROR_CONNECTION_ABORTED", 1236, "The network connection was aborted by the local system."),
    ("ERROR_RETRY", 1237, "The operation could not be completed. A retry should be performed."),
    ("ERROR_CONNECTION_COUNT_LIMIT", 1238, "A connection to the server could not be made because the limit on the number of concurrent connections for this account has been reached."),
    ("ERROR_LOGIN_TIME_RESTRICTION", 1239, "Attempting to log in during an unauthorized time of day for this account."),
    ("ERROR_LOGIN_WKSTA_RESTRICTION", 1240, "The account is not authorized to log in from this station."),
    ("ERROR_INCORRECT_ADDRESS", 1241, "The network address could not be used for the operation requested."),
    ("ERROR_ALREADY_REGISTERED", 1242, "The service is already registered."),
    ("ERROR_SERVICE_NOT_FOUND", 1243, "The specified service does not exist."),
    ("ERROR_NOT_AUTHENTICATED", 1244, "The operation being requested was not performed because the user has not been authenticated."),
    ("ERROR_NOT_LOGGED_ON", 1245, "The operation being requested was not performed because the user has not logged on to the network."),
    ("ERROR_CONTINUE", 1246, "Continue with work in progress."),
    ("ERROR_ALREADY_INITIALIZED", 1247, "An attempt was made to perform an initialization operation when initialization has already been completed."),
    ("ERROR_NO_MORE_DEVICES", 1248, "No more local devices."),
    ("ERROR_NO_SUCH_SITE", 1249, "The specified site does not exist."),
    ("ERROR_DOMAIN_CONTROLLER_EXISTS", 1250, "A domain controller with the specified name already exists."),
    ("ERROR_ONLY_IF_CONNECTED", 1251, "This operation is supported only when you are connected to the server."),
    ("ERROR_OVERRIDE_NOCHANGES", 1252, "The group policy framework should call the extension even if there are no changes."),
    ("ERROR_BAD_USER_PROFILE", 1253, "The specified user does not have a valid profile."),
    ("ERROR_NOT_SUPPORTED_ON_SBS", 1254, "This operation is not supported on a computer running Windows Server 2003 for Small Business Server."),
    ("ERROR_SERVER_SHUTDOWN_IN_PROGRESS", 1255, "The server machine is shutting down."),
    ("ERROR_HOST_DOWN", 1256, "The remote system is not available."),
    ("ERROR_NON_ACCOUNT_SID", 1257, "The security identifier provided is not from an account domain."),
    ("ERROR_NON_DOMAIN_SID", 1258, "The security identifier provided does not have a domain component."),
    ("ERROR_APPHELP_BLOCK", 1259, "AppHelp dialog canceled thus preventing the application from starting."),
    ("ERROR_ACCESS_DISABLED_BY_POLICY", 1260, "This program is blocked by group policy."),
    ("ERROR_REG_NAT_CONSUMPTION", 1261, "A program attempt to use an invalid register value."),
    ("ERROR_CSCSHARE_OFFLINE", 1262, "The share is currently offline or does not exist."),
    ("ERROR_PKINIT_FAILURE", 1263, "The Kerberos protocol encountered an error while validating the KDC certificate during smartcard logon."),
    ("ERROR_SMARTCARD_SUBSYSTEM_FAILURE", 1264, "The Kerberos protocol encountered an error while attempting to utilize the smartcard subsystem."),
    ("ERROR_DOWNGRADE_DETECTED", 1265, "The system cannot contact a domain controller to service the authentication request."),
    ("ERROR_MACHINE_LOCKED", 1271, "The machine is locked and cannot be shut down without the force option."),
    ("ERROR_CALLBACK_SUPPLIED_INVALID_DATA", 1273, "An application-defined callback gave invalid data when called."),
    ("ERROR_SYNC_FOREGROUND_REFRESH_REQUIRED", 1274, "The group policy framework should call the extension in the synchronous foreground policy refresh."),
    ("ERROR_DRIVER_BLOCKED", 1275, "This driver has been blocked from loading."),
    ("ERROR_INVALID_IMPORT_OF_NON_DLL", 1276, "A dynamic link library (DLL) referenced a module that was neither a DLL nor the process's executable image."),
    ("ERROR_ACCESS_DISABLED_WEBBLADE", 1277, "Windows cannot open this program since it has been disabled."),
    ("ERROR_RECOVERY_FAILURE", 1279, "A transaction recovery failed."),
    ("ERROR_ALREADY_FIBER", 1280, "The current thread has already been converted to a fiber."),
    ("ERROR_ALREADY_THREAD", 1281, "The current thread has already been converted from a fiber."),
    ("ERROR_STACK_BUFFER_OVERRUN", 1282, "The system detected an overrun of a stack-based buffer in this application."),
    ("ERROR_PARAMETER_QUOTA_EXCEEDED", 1283, "Data present in one of the parameters is more than the function can operate on."),
    ("ERROR_DEBUGGER_INACTIVE", 1284, "An attempt to do an operation on a debug object failed because the object is in the process of being deleted."),
    ("ERROR_DELAY_LOAD_FAILED", 1285, "An attempt to delay-load a .dll or get a function address in a delay-loaded .dll failed."),
    ("ERROR_VDM_DISALLOWED", 1286, "%1 is a 16-bit application. You do not have permissions to execute 16-bit applications."),
    ("ERROR_UNIDENTIFIED_ERROR", 1287, "Insufficient information exists to identify the cause of failure."),
    ("ERROR_INVALID_CRUNTIME_PARAMETER", 1288, "The parameter passed to a C runtime function is incorrect."),
    ("ERROR_BEYOND_VDL", 1289, "The operation occurred beyond the valid data length of the file."),
    ("ERROR_INCOMPATIBLE_SERVICE_SID_TYPE", 1290, "The service start failed since one or more services in the same process have an incompatible service SID type setting."),
    ("ERROR_DRIVER_PROCESS_TERMINATED", 1291, "The process hosting the driver for this device has been terminated."),
    ("ERROR_IMPLEMENTATION_LIMIT", 1292, "An operation attempted to exceed an implementation-defined limit."),
    ("ERROR_PROCESS_IS_PROTECTED", 1293, "Either the target process, or the target thread's containing process, is a protected process."),
    ("ERROR_SERVICE_NOTIFY_CLIENT_LAGGING", 1294, "The service notification client is lagging too far behind the current state of services in the machine."),
    ("ERROR_DISK_QUOTA_EXCEEDED", 1295, "The requested file operation failed because the storage quota was exceeded."),
    ("ERROR_CONTENT_BLOCKED", 1296, "The requested file operation failed because the storage policy blocks that type of file."),
    ("ERROR_INCOMPATIBLE_SERVICE_PRIVILEGE", 1297, "A privilege that the service requires to function properly does not exist in the service account configuration."),
    ("ERROR_APP_HANG", 1298, "A thread involved in this operation appears to be unresponsive."),
    ("ERROR_INVALID_LABEL", 1299, "Indicates a particular Security ID may not be assigned as the label of an object."),
    ("ERROR_NOT_ALL_ASSIGNED", 1300, "Not all privileges or groups referenced are assigned to the caller."),
    ("ERROR_SOME_NOT_MAPPED", 1301, "Some mapping between account names and security IDs was not done."),
    ("ERROR_NO_QUOTAS_FOR_ACCOUNT", 1302, "No system quota limits are specifically set for this account."),
    ("ERROR_LOCAL_USER_SESSION_KEY", 1303, "No encryption key is available. A well-known encryption key was returned."),
    ("ERROR_NULL_LM_PASSWORD", 1304, "The password is too complex to be converted to a LAN Manager password."),
    ("ERROR_UNKNOWN_REVISION", 1305, "The revision level is unknown."),
    ("ERROR_REVISION_MISMATCH", 1306, "Indicates two revision levels are incompatible."),
    ("ERROR_INVALID_OWNER", 1307, "This security ID may not be assigned as the owner of this object."),
    ("ERROR_INVALID_PRIMARY_GROUP", 1308, "This security ID may not be assigned as the primary group of an object."),
    ("ERROR_NO_IMPERSONATION_TOKEN", 1309, "An attempt has been made to operate on an impersonation token by a thread that is not currently impersonating a client."),
    ("ERROR_CANT_DISABLE_MANDATORY", 1310, "The group may not be disabled."),
    ("ERROR_NO_LOGON_SERVERS", 1311, "There are currently no logon servers available to service the logon request."),
    ("ERROR_NO_SUCH_LOGON_SESSION", 1312, "A specified logon session does not exist. It may already have been terminated."),
    ("ERROR_NO_SUCH_PRIVILEGE", 1313, "A specified privilege does not exist."),
    ("ERROR_PRIVILEGE_NOT_HELD", 1314, "A required privilege is not held by the client."),
    ("ERROR_INVALID_ACCOUNT_NAME", 1315, "The name provided is not a properly formed account name."),
    ("ERROR_USER_EXISTS", 1316, "The specified account already exists."),
    ("ERROR_NO_SUCH_USER", 1317, "The specified account does not exist."),
    ("ERROR_GROUP_EXISTS", 1318, "The specified group already exists."),
    ("ERROR_NO_SUCH_GROUP", 1319, "The specified group does not exist."),
    ("ERROR_MEMBER_IN_GROUP", 1320, "Either the specified user account is already a member of the specified group, or the specified group cannot be deleted because it contains a member."),
    ("ERROR_MEMBER_NOT_IN_GROUP", 1321, "The specified user account is not a member of the specified group account."),
    ("ERROR_LAST_ADMIN", 1322, "This operation is disallowed as it could result in an administration account being disabled, deleted or unable to log on."),
    ("ERROR_WRONG_PASSWORD", 1323, "Unable to update the password. The value provided as the current password is incorrect."),
    ("ERROR_ILL_FORMED_PASSWORD", 1324, "Unable to update the password. The value provided for the new password contains values that are not allowed in passwords."),
    ("ERROR_PASSWORD_RESTRICTION", 1325, "Unable to update the password. The value provided for the new password does not meet the length, complexity, or history requirements of the domain."),
    ("ERROR_LOGON_FAILURE", 1326, "The user name or password is incorrect."),
    ("ERROR_ACCOUNT_RESTRICTION", 1327, "Account restrictions are preventing this user from signing in."),
    ("ERROR_INVALID_LOGON_HOURS", 1328, "Your account has time restrictions that keep you from signing in right now."),
    ("ERROR_INVALID_WORKSTATION", 1329, "This user isn't allowed to sign in to this computer."),
    ("ERROR_PASSWORD_EXPIRED", 1330, "The password for this account has expired."),
    ("ERROR_ACCOUNT_DISABLED", 1331, "This user can't sign in because this account is currently disabled."),
    ("ERROR_NONE_MAPPED", 1332, "No mapping between account names and security IDs was done."),
    ("ERROR_TOO_MANY_LUIDS_REQUESTED", 1333, "Too many local user identifiers (LUIDs) were requested at one time."),
    ("ERROR_LUIDS_EXHAUSTED", 1334, "No more local user identifiers (LUIDs) are available."),
    ("ERROR_INVALID_SUB_AUTHORITY", 1335, "The subauthority part of a security ID is invalid for this particular use."),
    ("ERROR_INVALID_ACL", 1336, "The access control list (ACL) structure is invalid."),
    ("ERROR_INVALID_SID", 1337, "The security ID structure is invalid."),
    ("ERROR_INVALID_SECURITY_DESCR", 1338, "The security descriptor structure is invalid."),
    ("ERROR_BAD_INHERITANCE_ACL", 1340, "The inherited access control list (ACL) or access control entry (ACE) could not be built."),
    ("ERROR_SERVER_DISABLED", 1341, "The server is currently disabled."),
    ("ERROR_SERVER_NOT_DISABLED", 1342, "The server is currently enabled."),
    ("ERROR_INVALID_ID_AUTHORITY", 1343, "The value provided was an invalid value for an identifier authority."),
    ("ERROR_ALLOTTED_SPACE_EXCEEDED", 1344, "No more memory is available for security information updates."),
    ("ERROR_INVALID_GROUP_ATTRIBUTES", 1345, "The specified attributes are invalid, or incompatible with the attributes for the group as a whole."),
    ("ERROR_BAD_IMPERSONATION_LEVEL", 1346, "Either a required impersonation level was not provided, or the provided impersonation level is invalid."),
    ("ERROR_CANT_OPEN_ANONYMOUS", 1347, "Cannot open an anonymous level security token."),
    ("ERROR_BAD_VALIDATION_CLASS", 1348, "The validation information class requested was invalid."),
    ("ERROR_BAD_TOKEN_TYPE", 1349, "The type of the token is inappropriate for its attempted use."),
    ("ERROR_NO_SECURITY_ON_OBJECT", 1350, "Unable to perform a security operation on an object that has no associated security."),
    ("ERROR_CANT_ACCESS_DOMAIN_INFO", 1351, "Configuration information could not be read from the domain controller, either because the machine is unavailable, or access has been denied."),
    ("ERROR_INVALID_SERVER_STATE", 1352, "The security account manager (SAM) or local security authority (LSA) server was in the wrong state to perform the security operation."),
    ("ERROR_INVALID_DOMAIN_STATE", 1353, "The domain was in the wrong state to perform the security operation."),
    ("ERROR_INVALID_DOMAIN_ROLE", 1354, "This operation is only allowed for the Primary Domain Controller of the domain."),
    ("ERROR_NO_SUCH_DOMAIN", 1355, "The specified domain either does not exist or could not be contacted."),
    ("ERROR_DOMAIN_EXISTS", 1356, "The specified domain already exists."),
    ("ERROR_DOMAIN_LIMIT_EXCEEDED", 1357, "An attempt was made to exceed the limit on the number of domains per server."),
    ("ERROR_INTERNAL_DB_CORRUPTION", 1358, "Unable to complete the requested operation because of either a catastrophic media failure or a data structure corruption on the disk."),
    ("ERROR_INTERNAL_ERROR", 1359, "An internal error occurred."),
    ("ERROR_GENERIC_NOT_MAPPED", 1360, "Generic access types were contained in an access mask which should already be mapped to nongeneric types."),
    ("ERROR_BAD_DESCRIPTOR_FORMAT", 1361, "A security descriptor is not in the right format (absolute or self-relative)."),
    ("ERROR_NOT_LOGON_PROCESS", 1362, "The requested action is restricted for use by logon processes only."),
    ("ERROR_LOGON_SESSION_EXISTS", 1363, "Cannot start a new logon session with an ID that is already in use."),
    ("ERROR_NO_SUCH_PACKAGE", 1364, "A specified authentication package is unknown."),
    ("ERROR_BAD_LOGON_SESSION_STATE", 1365, "The logon session is not in a state that is consistent with the requested operation."),
    ("ERROR_LOGON_SESSION_COLLISION", 1366, "The logon session ID is already in use."),
    ("ERROR_INVALID_LOGON_TYPE", 1367, "A logon request contained an invalid logon type value."),
    ("ERROR_CANNOT_IMPERSONATE", 1368, "Unable to impersonate using a named pipe until data has been read from that pipe."),
    ("ERROR_RXACT_INVALID_STATE", 1369, "The transaction state of a registry subtree is incompatible with the requested operation."),
    ("ERROR_RXACT_COMMIT_FAILURE", 1370, "An internal security database corruption has been encountered."),
    ("ERROR_SPECIAL_ACCOUNT", 1371, "Cannot perform this operation on built-in accounts."),
    ("ERROR_SPECIAL_GROUP", 1372, "Cannot perform this operation on this built-in special group."),
    ("ERROR_SPECIAL_USER", 1373, "Cannot perform this operation on this built-in special user."),
    ("ERROR_MEMBERS_PRIMARY_GROUP", 1374, "The user cannot be removed from a group because the group is currently the user's primary group."),
    ("ERROR_TOKEN_ALREADY_IN_USE", 1375, "The token is already in use as a primary token."),
    ("ERROR_NO_SUCH_ALIAS", 1376, "The specified local group does not exist."),
    ("ERROR_MEMBER_NOT_IN_ALIAS", 1377, "The specified account name is not a member of the group."),
    ("ERROR_MEMBER_IN_ALIAS", 1378, "The specified account name is already a member of the group."),
    ("ERROR_ALIAS_EXISTS", 1379, "The specified local group already exists."),
    ("ERROR_LOGON_NOT_GRANTED", 1380, "Logon failure: the user has not been granted the requested logon type at this computer."),
    ("ERROR_TOO_MANY_SECRETS", 1381, "The maximum number of secrets that may be stored in a single system has been exceeded."),
    ("ERROR_SECRET_TOO_LONG", 1382, "The length of a secret exceeds the maximum length allowed."),
    ("ERROR_INTERNAL_DB_ERROR", 1383, "The local security authority database contains an internal inconsistency."),
    ("ERROR_TOO_MANY_CONTEXT_IDS", 1384, "During a logon attempt, the user's security context accumulated too many security IDs."),
    ("ERROR_LOGON_TYPE_NOT_GRANTED", 1385, "Logon failure: the user has not been granted the requested logon type at this computer."),
    ("ERROR_NT_CROSS_ENCRYPTION_REQUIRED", 1386, "A cross-encrypted password is necessary to change a user password."),
    ("ERROR_NO_SUCH_MEMBER", 1387, "A member could not be added to or removed from the local group because the member does not exist."),
    ("ERROR_INVALID_MEMBER", 1388, "A new member could not be added to a local group because the member has the wrong account type."),
    ("ERROR_TOO_MANY_SIDS", 1389, "Too many security IDs have been specified."),
    ("ERROR_LM_CROSS_ENCRYPTION_REQUIRED", 1390, "A cross-encrypted password is necessary to change this user password."),
    ("ERROR_NO_INHERITANCE", 1391, "Indicates an ACL contains no inheritable components."),
    ("ERROR_FILE_CORRUPT", 1392, "The file or directory is corrupted and unreadable."),
    ("ERROR_DISK_CORRUPT", 1393, "The disk structure is corrupted and unreadable."),
    ("ERROR_NO_USER_SESSION_KEY", 1394, "There is no user session key for the specified logon session."),
    ("ERROR_LICENSE_QUOTA_EXCEEDED", 1395, "The service being accessed is licensed for a particular number of connections."),
    ("ERROR_WRONG_TARGET_NAME", 1396, "The target account name is incorrect."),
    ("ERROR_MUTUAL_AUTH_FAILED", 1397, "Mutual Authentication failed. The server's password is out of date at the domain controller."),
    ("ERROR_TIME_SKEW", 1398, "There is a time and/or date difference between the client and server."),
    ("ERROR_CURRENT_DOMAIN_NOT_ALLOWED", 1399, "This operation cannot be performed on the current domain."),
    ("ERROR_INVALID_WINDOW_HANDLE", 1400, "Invalid window handle."),
    ("ERROR_INVALID_MENU_HANDLE", 1401, "Invalid menu handle."),
    ("ERROR_INVALID_CURSOR_HANDLE", 1402, "Invalid cursor handle."),
    ("ERROR_INVALID_ACCEL_HANDLE", 1403, "Invalid accelerator table handle."),
    ("ERROR_INVALID_HOOK_HANDLE", 1404, "Invalid hook handle."),
    ("ERROR_INVALID_DWP_HANDLE", 1405, "Invalid handle to a multiple-window position structure."),
    ("ERROR_TLW_WITH_WSCHILD", 1406, "Cannot create a top-level child window."),
    ("ERROR_CANNOT_FIND_WND_CLASS", 1407, "Cannot find window class."),
    ("ERROR_WINDOW_OF_OTHER_THREAD", 1408, "Invalid window; it belongs to other thread."),
    ("ERROR_HOTKEY_ALREADY_REGISTERED", 1409, "Hot key is already registered."),
    ("ERROR_CLASS_ALREADY_EXISTS", 1410, "Class already exists."),
    ("ERROR_CLASS_DOES_NOT_EXIST", 1411, "Class does not exist."),
    ("ERROR_CLASS_HAS_WINDOWS", 1412, "Class still has open windows."),
    ("ERROR_INVALID_INDEX", 1413, "Invalid index."),
    ("ERROR_INVALID_ICON_HANDLE", 1414, "Invalid icon handle."),
    ("ERROR_PRIVATE_DIALOG_INDEX", 1415, "Using private DIALOG window words."),
    ("ERROR_LISTBOX_ID_NOT_FOUND", 1416, "The list box identifier was not found."),
    ("ERROR_NO_WILDCARD_CHARACTERS", 1417, "No wildcards were found."),
    ("ERROR_CLIPBOARD_NOT_OPEN", 1418, "Thread does not have a clipboard open."),
    ("ERROR_HOTKEY_NOT_REGISTERED", 1419, "Hot key is not registered."),
    ("ERROR_WINDOW_NOT_DIALOG", 1420, "The window is not a valid dialog window."),
    ("ERROR_CONTROL_ID_NOT_FOUND", 1421, "Control ID not found."),
    ("ERROR_INVALID_COMBOBOX_MESSAGE", 1422, "Invalid message for a combo box because it does not have an edit control."),
    ("ERROR_WINDOW_NOT_COMBOBOX", 1423, "The window is not a combo box."),
    ("ERROR_INVALID_EDIT_HEIGHT", 1424, "Height must be less than 256."),
    ("ERROR_DC_NOT_FOUND", 1425, "Invalid device context (DC) handle."),
    ("ERROR_INVALID_HOOK_FILTER", 1426, "Invalid hook procedure type."),
    ("ERROR_INVALID_FILTER_PROC", 1427, "Invalid hook procedure."),
    ("ERROR_HOOK_NEEDS_HMOD", 1428, "Cannot set nonlocal hook without a module handle."),
    ("ERROR_GLOBAL_ONLY_HOOK", 1429, "This hook procedure can only be set globally."),
    ("ERROR_JOURNAL_HOOK_SET", 1430, "The journal hook procedure is already installed."),
    ("ERROR_HOOK_NOT_INSTALLED", 1431, "The hook procedure is not installed."),
    ("ERROR_INVALID_LB_MESSAGE", 1432, "Invalid message for single-selection list box."),
    ("ERROR_SETCOUNT_ON_BAD_LB", 1433, "LB_SETCOUNT sent to non-lazy list box."),
    ("ERROR_LB_WITHOUT_TABSTOPS", 1434, "This list box does not support tab stops."),
    ("ERROR_DESTROY_OBJECT_OF_OTHER_THREAD", 1435, "Cannot destroy object created by another thread."),
    ("ERROR_CHILD_WINDOW_MENU", 1436, "Child windows cannot have menus."),
    ("ERROR_NO_SYSTEM_MENU", 1437, "The window does not have a system menu."),
    ("ERROR_INVALID_MSGBOX_STYLE", 1438, "Invalid message box style."),
    ("ERROR_INVALID_SPI_VALUE", 1439, "Invalid system-wide (SPI_*) parameter."),
    ("ERROR_SCREEN_ALREADY_LOCKED", 1440, "Screen already locked."),
    ("ERROR_HWNDS_HAVE_DIFF_PARENT", 1441, "All handles to windows in a multiple-window position structure must have the same parent."),
    ("ERROR_NOT_CHILD_WINDOW", 1442, "The window is not a child window."),
    ("ERROR_INVALID_GW_COMMAND", 1443, "Invalid GW_* command."),
    ("ERROR_INVALID_THREAD_ID", 1444, "Invalid thread identifier."),
    ("ERROR_NON_MDICHILD_WINDOW", 1445, "Cannot process a message from a window that is not a multiple document interface (MDI) window."),
    ("ERROR_POPUP_ALREADY_ACTIVE", 1446, "Popup menu already active."),
    ("ERROR_NO_SCROLLBARS", 1447, "The window does not have scroll bars."),
    ("ERROR_INVALID_SCROLLBAR_RANGE", 1448, "Scroll bar range cannot be greater than MAXLONG."),
    ("ERROR_INVALID_SHOWWIN_COMMAND", 1449, "Cannot show or remove the window in the way specified."),
    ("ERROR_NO_SYSTEM_RESOURCES", 1450, "Insufficient system resources exist to complete the requested service."),
    ("ERROR_NONPAGED_SYSTEM_RESOURCES", 1451, "Insufficient system resources exist to complete the requested service."),
    ("ERROR_PAGED_SYSTEM_RESOURCES", 1452, "Insufficient system resources exist to complete the requested service."),
    ("ERROR_WORKING_SET_QUOTA", 1453, "Insufficient quota to complete the requested service."),
    ("ERROR_PAGEFILE_QUOTA", 1454, "Insufficient quota to complete the requested service."),
    ("ERROR_COMMITMENT_LIMIT", 1455, "The paging file is too small for this operation to complete."),
    ("ERROR_MENU_ITEM_NOT_FOUND", 1456, "A menu item was not found."),
    ("ERROR_INVALID_KEYBOARD_HANDLE", 1457, "Invalid keyboard layout handle."),
    ("ERROR_HOOK_TYPE_NOT_ALLOWED", 1458, "Hook type not allowed."),
    ("ERROR_REQUIRES_INTERACTIVE_WINDOWSTATION", 1459, "This operation requires an interactive window station."),
    ("ERROR_TIMEOUT", 1460, "This operation returned because the timeout period expired."),
    ("ERROR_INVALID_MONITOR_HANDLE", 1461, "Invalid monitor handle."),
    ("ERROR_INCORRECT_SIZE", 1462, "Incorrect size argument."),
    ("ERROR_SYMLINK_CLASS_DISABLED", 1463, "The symbolic link cannot be followed because its type is disabled."),
    ("ERROR_SYMLINK_NOT_SUPPORTED", 1464, "This application does not support the current operation on symbolic links."),
    ("ERROR_XML_PARSE_ERROR", 1465, "Windows was unable to parse the requested XML data."),
    ("ERROR_XMLDSIG_ERROR", 1466, "An error was encountered while processing an XML digital signature."),
    ("ERROR_RESTART_APPLICATION", 1467, "This application must be restarted."),
    ("ERROR_WRONG_COMPARTMENT", 1468, "The caller made the connection request in the wrong routing compartment."),
    ("ERROR_AUTHIP_FAILURE", 1469, "There was an AuthIP failure when attempting to connect to the remote host."),
    ("ERROR_NO_NVRAM_RESOURCES", 1470, "Insufficient NVRAM resources exist to complete the requested service."),
    ("ERROR_NOT_GUI_PROCESS", 1471, "Unable to finish the requested operation because the specified process is not a GUI process."),
    ("ERROR_EVENTLOG_FILE_CORRUPT", 1500, "The event log file is corrupted."),
    ("ERROR_EVENTLOG_CANT_START", 1501, "No event log file could be opened, so the event logging service did not start."),
    ("ERROR_LOG_FILE_FULL", 1502, "The event log file is full."),
    ("ERROR_EVENTLOG_FILE_CHANGED", 1503, "The event log file has changed between read operations."),
    ("ERROR_INVALID_TASK_NAME", 1550, "The specified task name is invalid."),
    ("ERROR_INVALID_TASK_INDEX", 1551, "The specified task index is invalid."),
    ("ERROR_THREAD_ALREADY_IN_TASK", 1552, "The specified thread is already joining a task."),
    ("ERROR_INSTALL_SERVICE_FAILURE", 1601, "The Windows Installer Service could not be accessed."),
    ("ERROR_INSTALL_USEREXIT", 1602, "User cancelled installation."),
    ("ERROR_INSTALL_FAILURE", 1603, "Fatal error during installation."),
    ("ERROR_INSTALL_SUSPEND", 1604, "Installation suspended, incomplete."),
    ("ERROR_UNKNOWN_PRODUCT", 1605, "This action is only valid for products that are currently installed."),
    ("ERROR_UNKNOWN_FEATURE", 1606, "Feature ID not registered."),
    ("ERROR_UNKNOWN_COMPONENT", 1607, "Component ID not registered."),
    ("ERROR_UNKNOWN_PROPERTY", 1608, "Unknown property."),
    ("ERROR_INVALID_HANDLE_STATE", 1609, "Handle is in an invalid state."),
    ("ERROR_BAD_CONFIGURATION", 1610, "The configuration data for this product is corrupt."),
    ("ERROR_INDEX_ABSENT", 1611, "Component qualifier not present."),
    ("ERROR_INSTALL_SOURCE_ABSENT", 1612, "The installation source for this product is not available."),
    ("ERROR_INSTALL_PACKAGE_VERSION", 1613, "This installation package cannot be installed by the Windows Installer service."),
    ("ERROR_PRODUCT_UNINSTALLED", 1614, "Product is uninstalled."),
    ("ERROR_BAD_QUERY_SYNTAX", 1615, "SQL query syntax invalid or unsupported."),
    ("ERROR_INVALID_FIELD", 1616, "Record field does not exist."),
    ("ERROR_DEVICE_REMOVED", 1617, "The device has been removed."),
    ("ERROR_INSTALL_ALREADY_RUNNING", 1618, "Another installation is already in progress."),
    ("ERROR_INSTALL_PACKAGE_OPEN_FAILED", 1619, "This installation package could not be opened."),
    ("ERROR_INSTALL_PACKAGE_INVALID", 1620, "This installation package could not be opened. Contact the application vendor to verify that this is a valid Windows Installer package."),
    ("ERROR_INSTALL_UI_FAILURE", 1621, "There was an error starting the Windows Installer service user interface."),
    ("ERROR_INSTALL_LOG_FAILURE", 1622, "Error opening installation log file."),
    ("ERROR_INSTALL_LANGUAGE_UNSUPPORTED", 1623, "The language of this installation package is not supported by your system."),
    ("ERROR_INSTALL_TRANSFORM_FAILURE", 1624, "Error applying transforms."),
    ("ERROR_INSTALL_PACKAGE_REJECTED", 1625, "This installation is forbidden by system policy."),
    ("ERROR_FUNCTION_NOT_CALLED", 1626, "Function could not be executed."),
    ("ERROR_FUNCTION_FAILED", 1627, "Function failed during execution."),
    ("ERROR_INVALID_TABLE", 1628, "Invalid or unknown table specified."),
    ("ERROR_DATATYPE_MISMATCH", 1629, "Data supplied is of wrong type."),
    ("ERROR_UNSUPPORTED_TYPE", 1630, "Data of this type is not supported."),
    ("ERROR_CREATE_FAILED", 1631, "The Windows Installer service failed to start."),
    ("ERROR_INSTALL_TEMP_UNWRITABLE", 1632, "The Temp folder is on a drive that is full or is inaccessible."),
    ("ERROR_INSTALL_PLATFORM_UNSUPPORTED", 1633, "This installation package is not supported by this processor type."),
    ("ERROR_INSTALL_NOTUSED", 1634, "Component not used on this computer."),
    ("ERROR_PATCH_PACKAGE_OPEN_FAILED", 1635, "This update package could not be opened."),
    ("ERROR_PATCH_PACKAGE_INVALID", 1636, "This update package could not be opened."),
    ("ERROR_PATCH_PACKAGE_UNSUPPORTED", 1637, "This update package cannot be processed by the Windows Installer service."),
    ("ERROR_PRODUCT_VERSION", 1638, "Another version of this product is already installed."),
    ("ERROR_INVALID_COMMAND_LINE", 1639, "Invalid command line argument."),
    ("ERROR_INSTALL_REMOTE_DISALLOWED", 1640, "Only administrators have permission to add, remove, or configure server software during a Terminal services remote session."),
    ("ERROR_SUCCESS_REBOOT_INITIATED", 1641, "The requested operation completed successfully. The system will be restarted so the changes can take effect."),
    ("ERROR_PATCH_TARGET_NOT_FOUND", 1642, "The upgrade cannot be installed by the Windows Installer service because the program to be upgraded may be missing."),
    ("ERROR_PATCH_PACKAGE_REJECTED", 1643, "The update package is not permitted by software restriction policy."),
    ("ERROR_INSTALL_TRANSFORM_REJECTED", 1644, "One or more customizations are not permitted by software restriction policy."),
    ("ERROR_INSTALL_REMOTE_PROHIBITED", 1645, "The Windows Installer does not permit installation from a Remote Desktop Connection."),
    ("RPC_S_INVALID_STRING_BINDING", 1700, "The string binding is invalid."),
    ("RPC_S_WRONG_KIND_OF_BINDING", 1701, "The binding handle is not the correct type."),
    ("RPC_S_INVALID_BINDING", 1702, "The binding handle is invalid."),
    ("RPC_S_PROTSEQ_NOT_SUPPORTED", 1703, "The RPC protocol sequence is not supported."),
    ("RPC_S_INVALID_RPC_PROTSEQ", 1704, "The RPC protocol sequence is invalid."),
    ("RPC_S_INVALID_STRING_UUID", 1705, "The string universal unique identifier (UUID) is invalid."),
    ("RPC_S_INVALID_ENDPOINT_FORMAT", 1706, "The endpoint format is invalid."),
    ("RPC_S_INVALID_NET_ADDR", 1707, "The network address is invalid."),
    ("RPC_S_NO_ENDPOINT_FOUND", 1708, "No endpoint was found."),
    ("RPC_S_INVALID_TIMEOUT", 1709, "The timeout value is invalid."),
    ("RPC_S_OBJECT_NOT_FOUND", 1710, "The object universal unique identifier (UUID) was not found."),
    ("RPC_S_ALREADY_REGISTERED", 1711, "The object universal unique identifier (UUID) has already been registered."),
    ("RPC_S_TYPE_ALREADY_REGISTERED", 1712, "The type universal unique identifier (UUID) has already been registered."),
    ("RPC_S_ALREADY_LISTENING", 1713, "The RPC server is already listening."),
    ("RPC_S_NO_PROTSEQS_REGISTERED", 1714, "No protocol sequences have been registered."),
    ("RPC_S_NOT_LISTENING", 1715, "The RPC server is not listening."),
    ("RPC_S_UNKNOWN_MGR_TYPE", 1716, "The manager type is unknown."),
    ("RPC_S_UNKNOWN_IF", 1717, "The interface is unknown."),
    ("RPC_S_NO_BINDINGS", 1718, "There are no bindings."),
    ("RPC_S_NO_PROTSEQS", 1719, "There are no protocol sequences."),
    ("RPC_S_CANT_CREATE_ENDPOINT", 1720, "The endpoint cannot be created."),
    ("RPC_S_OUT_OF_RESOURCES", 1721, "Not enough resources are available to complete this operation."),
    ("RPC_S_SERVER_UNAVAILABLE", 1722, "The RPC server is unavailable."),
    ("RPC_S_SERVER_TOO_BUSY", 1723, "The RPC server is too busy to complete this operation."),
    ("RPC_S_INVALID_NETWORK_OPTIONS", 1724, "The network options are invalid."),
    ("RPC_S_NO_CALL_ACTIVE", 1725, "There are no remote procedure calls active on this thread."),
    ("RPC_S_CALL_FAILED", 1726, "The remote procedure call failed."),
    ("RPC_S_CALL_FAILED_DNE", 1727, "The remote procedure call failed and did not execute."),
    ("RPC_S_PROTOCOL_ERROR", 1728, "A remote procedure call (RPC) protocol error occurred."),
    ("RPC_S_PROXY_ACCESS_DENIED", 1729, "Access to the HTTP proxy is denied."),
    ("RPC_S_UNSUPPORTED_TRANS_SYN", 1730, "The transfer syntax is not supported by the RPC server."),
    ("RPC_S_UNSUPPORTED_TYPE", 1732, "The universal unique identifier (UUID) type is not supported."),
    ("RPC_S_INVALID_TAG", 1733, "The tag is invalid."),
    ("RPC_S_INVALID_BOUND", 1734, "The array bounds are invalid."),
    ("RPC_S_NO_ENTRY_NAME", 1735, "The binding does not contain an entry name."),
    ("RPC_S_INVALID_NAME_SYNTAX", 1736, "The name syntax is invalid."),
    ("RPC_S_UNSUPPORTED_NAME_SYNTAX", 1737, "The name syntax is not supported."),
    ("RPC_S_UUID_NO_ADDRESS", 1739, "No network address is available to use to construct a universal unique identifier (UUID)."),
    ("RPC_S_DUPLICATE_ENDPOINT", 1740, "The endpoint is a duplicate."),
    ("RPC_S_UNKNOWN_AUTHN_TYPE", 1741, "The authentication type is unknown."),
    ("RPC_S_MAX_CALLS_TOO_SMALL", 1742, "The maximum number of calls is too small."),
    ("RPC_S_STRING_TOO_LONG", 1743, "The string is too long."),
    ("RPC_S_PROTSEQ_NOT_FOUND", 1744, "The RPC protocol sequence was not found."),
    ("RPC_S_PROCNUM_OUT_OF_RANGE", 1745, "The procedure number is out of range."),
    ("RPC_S_BINDING_HAS_NO_AUTH", 1746, "The binding does not contain any authentication information."),
    ("RPC_S_UNKNOWN_AUTHN_SERVICE", 1747, "The authentication service is unknown."),
    ("RPC_S_UNKNOWN_AUTHN_LEVEL", 1748, "The authentication level is unknown."),
    ("RPC_S_INVALID_AUTH_IDENTITY", 1749, "The security context is invalid."),
    ("RPC_S_UNKNOWN_AUTHZ_SERVICE", 1750, "The authorization service is unknown."),
    ("RPC_S_NOTHING_TO_EXPORT", 1754, "There are no interfaces to export."),
    ("RPC_S_INCOMPLETE_NAME", 1755, "The entry name is incomplete."),
    ("RPC_S_INVALID_VERS_OPTION", 1756, "The version option is invalid."),
    ("RPC_S_NO_MORE_MEMBERS", 1757, "There are no more members."),
    ("RPC_S_NOT_ALL_OBJS_UNEXPORTED", 1758, "There is nothing to unexport."),
    ("RPC_S_INTERFACE_NOT_FOUND", 1759, "The interface was not found."),
    ("RPC_S_ENTRY_ALREADY_EXISTS", 1760, "The entry already exists."),
    ("RPC_S_ENTRY_NOT_FOUND", 1761, "The entry is not found."),
    ("RPC_S_NAME_SERVICE_UNAVAILABLE", 1762, "The name service is unavailable."),
    ("RPC_S_INVALID_NAF_ID", 1763, "The network address family is invalid."),
    ("RPC_S_CANNOT_SUPPORT", 1764, "The requested operation is not supported."),
    ("RPC_S_NO_CONTEXT_AVAILABLE", 1765, "No security context is available to allow impersonation."),
    ("RPC_S_INTERNAL_ERROR", 1766, "An internal error occurred in a remote procedure call (RPC)."),
    ("RPC_S_ZERO_DIVIDE", 1767, "The RPC server attempted an integer division by zero."),
    ("RPC_S_ADDRESS_ERROR", 1768, "An addressing error occurred in the RPC server."),
    ("RPC_S_FP_DIV_ZERO", 1769, "A floating-point operation at the RPC server caused a division by zero."),
    ("RPC_S_FP_UNDERFLOW", 1770, "A floating-point underflow occurred at the RPC server."),
    ("RPC_S_FP_OVERFLOW", 1771, "A floating-point overflow occurred at the RPC server."),
    ("ERROR_INVALID_USER_BUFFER", 1784, "The supplied user buffer is not valid for the requested operation."),
    ("ERROR_UNRECOGNIZED_MEDIA", 1785, "The disk media is not recognized. It may not be formatted."),
    ("ERROR_NO_TRUST_LSA_SECRET", 1786, "The workstation does not have a trust secret."),
    ("ERROR_NO_TRUST_SAM_ACCOUNT", 1787, "The security database on the server does not have a computer account for this workstation trust relationship."),
    ("ERROR_TRUSTED_DOMAIN_FAILURE", 1788, "The trust relationship between the primary domain and the trusted domain failed."),
    ("ERROR_TRUSTED_RELATIONSHIP_FAILURE", 1789, "The trust relationship between this workstation and the primary domain failed."),
    ("ERROR_TRUST_FAILURE", 1790, "The network logon failed."),
    ("RPC_S_CALL_IN_PROGRESS", 1791, "A remote procedure call is already in progress for this thread."),
    ("ERROR_NETLOGON_NOT_STARTED", 1792, "An attempt was made to logon, but the network logon service was not started."),
    ("ERROR_ACCOUNT_EXPIRED", 1793, "The user's account has expired."),
    ("ERROR_REDIRECTOR_HAS_OPEN_HANDLES", 1794, "The redirector is in use and cannot be unloaded."),
    ("ERROR_PRINTER_DRIVER_ALREADY_INSTALLED", 1795, "The specified printer driver is already installed."),
    ("ERROR_UNKNOWN_PORT", 1796, "The specified port is unknown."),
    ("ERROR_UNKNOWN_PRINTER_DRIVER", 1797, "The printer driver is unknown."),
    ("ERROR_UNKNOWN_PRINTPROCESSOR", 1798, "The print processor is unknown."),
    ("ERROR_INVALID_SEPARATOR_FILE", 1799, "The specified separator file is invalid."),
    ("ERROR_INVALID_PRIORITY", 1800, "The specified priority is invalid."),
    ("ERROR_INVALID_PRINTER_NAME", 1801, "The printer name is invalid."),
    ("ERROR_PRINTER_ALREADY_EXISTS", 1802, "The printer already exists."),
    ("ERROR_INVALID_PRINTER_COMMAND", 1803, "The printer command is invalid."),
    ("ERROR_INVALID_DATATYPE", 1804, "The specified datatype is invalid."),
    ("ERROR_INVALID_ENVIRONMENT", 1805, "The environment specified is invalid."),
    ("RPC_S_NO_MORE_BINDINGS", 1806, "There are no more bindings."),
    ("ERROR_NOLOGON_INTERDOMAIN_TRUST_ACCOUNT", 1807, "The account used is an interdomain trust account."),
    ("ERROR_NOLOGON_WORKSTATION_TRUST_ACCOUNT", 1808, "The account used is a computer account."),
    ("ERROR_NOLOGON_SERVER_TRUST_ACCOUNT", 1809, "The account used is a server trust account."),
    ("ERROR_DOMAIN_TRUST_INCONSISTENT", 1810, "The name or security ID (SID) of the domain specified is inconsistent with the trust information for that domain."),
    ("ERROR_SERVER_HAS_OPEN_HANDLES", 1811, "The server is in use and cannot be unloaded."),
    ("ERROR_RESOURCE_DATA_NOT_FOUND", 1812, "The specified image file did not contain a resource section."),
    ("ERROR_RESOURCE_TYPE_NOT_FOUND", 1813, "The specified resource type cannot be found in the image file."),
    ("ERROR_RESOURCE_NAME_NOT_FOUND", 1814, "The specified resource name cannot be found in the image file."),
    ("ERROR_RESOURCE_LANG_NOT_FOUND", 1815, "The specified resource language ID cannot be found in the image file."),
    ("ERROR_NOT_ENOUGH_QUOTA", 1816, "Not enough quota is available to process this command."),
    ("RPC_S_NO_INTERFACES", 1817, "No interfaces have been registered."),
    ("RPC_S_CALL_CANCELLED", 1818, "The remote procedure call was cancelled."),
    ("RPC_S_BINDING_INCOMPLETE", 1819, "The binding handle does not contain all required information."),
    ("RPC_S_COMM_FAILURE", 1820, "A communications failure occurred during a remote procedure call."),
    ("RPC_S_UNSUPPORTED_AUTHN_LEVEL", 1821, "The requested authentication level is not supported."),
    ("RPC_S_NO_PRINC_NAME", 1822, "No principal name registered."),
    ("RPC_S_NOT_RPC_ERROR", 1823, "The error specified is not a valid Windows RPC error code."),
    ("RPC_S_UUID_LOCAL_ONLY", 1824, "A UUID that is valid only on this computer has been allocated."),
    ("RPC_S_SEC_PKG_ERROR", 1825, "A security package-specific error occurred."),
    ("RPC_S_NOT_CANCELLED", 1826, "The thread is not canceled."),
    ("ERROR_INVALID_TIME", 1901, "The specified time is invalid."),
    ("ERROR_INVALID_FORM_NAME", 1902, "The specified form name is invalid."),
    ("ERROR_INVALID_FORM_SIZE", 1903, "The specified form size is invalid."),
    ("ERROR_ALREADY_WAITING", 1904, "The specified printer handle is already being waited on."),
    ("ERROR_PRINTER_DELETED", 1905, "The specified printer has been deleted."),
    ("ERROR_INVALID_PRINTER_STATE", 1906, "The state of the printer is invalid."),
    ("ERROR_PASSWORD_MUST_CHANGE", 1907, "The user's password must be changed before signing in."),
    ("ERROR_DOMAIN_CONTROLLER_NOT_FOUND", 1908, "Could not find the domain controller for this domain."),
    ("ERROR_ACCOUNT_LOCKED_OUT", 1909, "The referenced account is currently locked out and may not be logged on to."),
    ("ERROR_NO_SITENAME", 1919, "No site name is available for this machine."),
    ("ERROR_CANT_ACCESS_FILE", 1920, "The file cannot be accessed by the system."),
    ("ERROR_CANT_RESOLVE_FILENAME", 1921, "The name of the file cannot be resolved by the system."),
    ("ERROR_KM_DRIVER_BLOCKED", 1930, "The specified driver is blocked from loading."),
    ("ERROR_CONTEXT_EXPIRED", 1931, "The context has expired and can no longer be used."),
    ("ERROR_PER_USER_TRUST_QUOTA_EXCEEDED", 1932, "The current user's delegated trust creation quota has been exceeded."),
    ("ERROR_ALL_USER_TRUST_QUOTA_EXCEEDED", 1933, "The total delegated trust creation quota has been exceeded."),
    ("ERROR_USER_DELETE_TRUST_QUOTA_EXCEEDED", 1934, "The current user's delegated trust deletion quota has been exceeded."),
    ("ERROR_AUTHENTICATION_FIREWALL_FAILED", 1935, "The computer you are signing into is protected by an authentication firewall."),
    ("ERROR_REMOTE_PRINT_CONNECTIONS_BLOCKED", 1936, "Remote connections to the Print Spooler are blocked by a policy set on your machine."),
    ("ERROR_NTLM_BLOCKED", 1937, "Authentication failed because NTLM authentication has been disabled."),
    ("ERROR_PASSWORD_CHANGE_REQUIRED", 1938, "Logon Failure: EAS policy requires that the user change their password before this operation can be performed."),
    ("ERROR_INVALID_PIXEL_FORMAT", 2000, "The pixel format is invalid."),
    ("ERROR_BAD_DRIVER", 2001, "The specified driver is invalid."),
    ("ERROR_INVALID_WINDOW_STYLE", 2002, "The window style or class attribute is invalid for this operation."),
    ("ERROR_METAFILE_NOT_SUPPORTED", 2003, "The requested metafile operation is not supported."),
    ("ERROR_TRANSFORM_NOT_SUPPORTED", 2004, "The requested transformation operation is not supported."),
    ("ERROR_CLIPPING_NOT_SUPPORTED", 2005, "The requested clipping operation is not supported."),
    ("NERR_NetNotStarted", 2102, "The workstation driver is not installed."),
    ("NERR_UnknownServer", 2103, "The server could not be located."),
    ("NERR_ShareMem", 2104, "An internal error occurred. The network cannot access a shared memory segment."),
    ("NERR_NoNetworkResource", 2105, "A network resource shortage occurred."),
    ("NERR_RemoteOnly", 2106, "This operation is not supported on workstations."),
    ("NERR_DevNotRedirected", 2107, "The device is not connected."),
    ("ERROR_CONNECTED_OTHER_PASSWORD", 2108, "The network connection was made successfully, but the user had to be prompted for a password other than the one originally specified."),
    ("NERR_ServerNotStarted", 2114, "The Server service is not started."),
    ("NERR_ItemNotFound", 2115, "The queue is empty."),
    ("NERR_UnknownDevDir", 2116, "The device or directory does not exist."),
    ("NERR_RedirectedPath", 2117, "The operation is invalid on a redirected resource."),
    ("NERR_DuplicateShare", 2118, "The name has already been shared."),
    ("NERR_NoRoom", 2119, "The server is currently out of the requested resource."),
    ("NERR_TooManyItems", 2121, "Requested addition of items exceeds the maximum allowed."),
    ("NERR_InvalidMaxUsers", 2122, "The Peer service supports only two simultaneous users."),
    ("NERR_BufTooSmall", 2123, "The API return buffer is too small."),
    ("NERR_RemoteErr", 2127, "A remote API error occurred."),
    ("NERR_LanmanIniError", 2131, "An error occurred when opening or reading the configuration file."),
    ("NERR_NetworkError", 2136, "A general network error occurred."),
    ("NERR_WkstaInconsistentState", 2137, "The Workstation service is in an inconsistent state."),
    ("NERR_WkstaNotStarted", 2138, "The Workstation service has not been started."),
    ("NERR_BrowserNotStarted", 2139, "The requested information is not available."),
    ("NERR_InternalError", 2140, "An internal Windows error occurred."),
    ("NERR_BadTransactConfig", 2141, "The server is not configured for transactions."),
    ("NERR_InvalidAPI", 2142, "The requested API is not supported on the remote server."),
    ("NERR_BadEventName", 2143, "The event name is invalid."),
    ("NERR_DupNameReboot", 2144, "The computer name already exists on the network. Change it and restart the computer."),
    ("ERROR_BAD_USERNAME", 2202, "The specified username is invalid."),
    ("NERR_GroupNotFound", 2220, "The group name could not be found."),
    ("NERR_UserNotFound", 2221, "The user name could not be found."),
    ("NERR_ResourceNotFound", 2222, "The resource name could not be found."),
    ("NERR_GroupExists", 2223, "The group already exists."),
    ("NERR_UserExists", 2224, "The account already exists."),
    ("NERR_ResourceExists", 2225, "The resource permission list already exists."),
    ("NERR_NotPrimary", 2226, "This operation is only allowed on the primary domain controller of the domain."),
    ("NERR_ACFNotLoaded", 2227, "The security database has not been started."),
    ("NERR_ACFNoRoom", 2228, "There are too many names in the user accounts database."),
    ("NERR_ACFFileIOFail", 2229, "A disk I/O failure occurred."),
    ("NERR_ACFTooManyLists", 2230, "The limit of 64 entries per resource was exceeded."),
    ("NERR_UserLogon", 2231, "Deleting a user with a session is not allowed."),
    ("NERR_ACFNoParent", 2232, "The parent directory could not be located."),
    ("NERR_CanNotGrowSegment", 2233, "Unable to add to the security database session cache segment."),
    ("NERR_SpeGroupOp", 2234, "This operation is not allowed on this special group."),
    ("NERR_NotInCache", 2235, "This user is not cached in user accounts database session cache."),
    ("NERR_UserInGroup", 2236, "The user already belongs to this group."),
    ("NERR_UserNotInGroup", 2237, "The user does not belong to this group."),
    ("NERR_AccountUndefined", 2238, "This user account is undefined."),
    ("NERR_AccountExpired", 2239, "This user account has expired."),
    ("NERR_InvalidWorkstation", 2240, "The user is not allowed to log on from this workstation."),
    ("NERR_InvalidLogonHours", 2241, "The user is not allowed to log on at this time."),
    ("NERR_PasswordExpired", 2242, "The password of this user has expired."),
    ("NERR_PasswordCantChange", 2243, "The password of this user cannot change."),
    ("NERR_PasswordHistConflict", 2244, "This password cannot be used now."),
    ("NERR_PasswordTooShort", 2245, "The password does not meet the password policy requirements."),
    ("NERR_PasswordTooRecent", 2246, "The password of this user is too recent to change."),
    ("NERR_InvalidDatabase", 2247, "The security database is corrupted."),
    ("NERR_DatabaseUpToDate", 2248, "No updates are necessary to this replicant network/local security database."),
    ("NERR_SyncRequired", 2249, "This replicant database is outdated; synchronization is required."),
    ("ERROR_NOT_CONNECTED", 2250, "This network connection does not exist."),
    ("NERR_UseNotFound", 2251, "The network connection could not be found."),
    ("NERR_BadAsgType", 2252, "This asg_type is invalid."),
    ("NERR_DeviceIsShared", 2253, "This device is currently being shared."),
    ("NERR_SameAsComputerName", 2254, "The user name may not be same as computer name."),
    ("NERR_NoComputerName", 2270, "The computer name could not be added as a message alias. The name may already exist on the network."),
    ("NERR_MsgAlreadyStarted", 2271, "The Messenger service is already started."),
    ("NERR_MsgInitFailed", 2272, "The Messenger service failed to start."),
    ("NERR_NameNotFound", 2273, "The message alias could not be found on the network."),
    ("NERR_AlreadyForwarded", 2274, "This message alias has already been forwarded."),
    ("NERR_AddForwarded", 2275, "This message alias has been added but is still forwarded."),
    ("NERR_AlreadyExists", 2276, "This message alias already exists locally."),
    ("NERR_TooManyNames", 2277, "The maximum number of added message aliases has been exceeded."),
    ("NERR_DelComputerName", 2278, "The computer name could not be deleted."),
    ("NERR_LocalForward", 2279, "Messages cannot be forwarded back to the same workstation."),
    ("NERR_MultipleNets", 2300, "The operation is invalid on a computer with multiple networks."),
    ("NERR_NetNameNotFound", 2310, "This shared resource does not exist."),
    ("NERR_DeviceNotShared", 2311, "This device is not shared."),
    ("NERR_ClientNameNotFound", 2312, "A session does not exist with that computer name."),
    ("NERR_FileIdNotFound", 2314, "There is not an open file with that identification number."),
    ("NERR_ExecFailure", 2315, "A failure occurred when executing a remote administration command."),
    ("NERR_TmpFile", 2316, "A failure occurred when opening a remote temporary file."),
    ("NERR_TooMuchData", 2317, "The data returned from a remote administration command has been truncated to 64K."),
    ("NERR_DeviceShareConflict", 2318, "This device cannot be shared as both a spooled and a non-spooled resource."),
    ("NERR_BrowserTableIncomplete", 2319, "The information in the list of servers may be incorrect."),
    ("NERR_NotLocalDomain", 2320, "The computer is not active in this domain."),
    ("NERR_IsDfsShare", 2321, "The share must be removed from the Distributed File System before it can be deleted."),
    ("NERR_DevInvalidOpCode", 2331, "The operation is invalid for this device."),
    ("NERR_DevNotFound", 2332, "This device cannot be shared."),
    ("NERR_DevNotOpen", 2333, "This device was not open."),
    ("NERR_BadQueueDevString", 2334, "This device name list is invalid."),
    ("NERR_BadQueuePriority", 2335, "The queue priority is invalid."),
    ("NERR_NoCommDevs", 2337, "There are no shared communication devices."),
    ("NERR_QueueNotFound", 2338, "The queue you specified does not exist."),
    ("NERR_BadDevString", 2340, "This list of devices is invalid."),
    ("NERR_BadDev", 2341, "The requested device is invalid."),
    ("NERR_InUseBySpooler", 2342, "This device is already in use by the spooler."),
    ("NERR_CommDevInUse", 2343, "This device is already in use as a communication device."),
    ("NERR_InvalidComputer", 2351, "This computer name is invalid."),
    ("NERR_MaxLenExceeded", 2354, "The string and prefix specified are too long."),
    ("NERR_BadComponent", 2356, "This path component is invalid."),
    ("NERR_CantType", 2357, "Could not determine the type of input."),
    ("NERR_TooManyEntries", 2362, "The buffer for types is not big enough."),
    ("NERR_ProfileFileTooBig", 2370, "Profile files cannot exceed 64K."),
    ("NERR_ProfileOffset", 2371, "The start offset is out of range."),
    ("NERR_ProfileCleanup", 2372, "The system cannot delete current connections to network resources."),
    ("NERR_ProfileUnknownCmd", 2373, "The system was unable to parse the command line in this file."),
    ("NERR_ProfileLoadErr", 2374, "An error occurred while loading the profile file."),
    ("NERR_ProfileSaveErr", 2375, "Errors occurred while saving the profile file. The profile was partially saved."),
    ("NERR_LogOverflow", 2377, "Log file is full."),
    ("NERR_LogFileChanged", 2378, "This log file has changed between reads."),
    ("NERR_LogFileCorrupt", 2379, "Log file is corrupt."),
    ("NERR_SourceIsDir", 2380, "The source path cannot be a directory."),
    ("NERR_BadSource", 2381, "The source path is illegal."),
    ("NERR_BadDest", 2382, "The destination path is illegal."),
    ("NERR_DifferentServers", 2383, "The source and destination paths are on different servers."),
    ("NERR_RunSrvPaused", 2385, "The Run server you requested is paused."),
    ("NERR_ErrCommRunSrv", 2389, "An error occurred when communicating with a Run server."),
    ("NERR_ErrorExecingGhost", 2391, "An error occurred when starting a background process."),
    ("NERR_ShareNotFound", 2392, "The shared resource you are connected to could not be found."),
    ("NERR_InvalidLana", 2400, "The LAN adapter number is invalid."),
    ("ERROR_OPEN_FILES", 2401, "This network connection has files open or requests pending."),
    ("ERROR_ACTIVE_CONNECTIONS", 2402, "Active connections still exist."),
    ("ERROR_DEVICE_IN_USE", 2404, "The device is in use by an active process and cannot be disconnected."),
    ("NERR_DCNotFound", 2453, "Could not find domain controller for this domain."),
    ("NERR_InvalidUASOp", 2456, "The user accounts database could not be accessed."),
    ("NERR_PasswordMustChange", 2701, "The user must change the password before logging on."),
    ("NERR_AccountLockedOut", 2702, "The account is locked out."),
    ("NERR_PasswordTooLong", 2703, "The password is too long."),
    ("NERR_PasswordNotComplexEnough", 2704, "The password does not meet the complexity policy."),
    ("NERR_PasswordFilterError", 2705, "The password does not meet the requirements of the password filter DLLs."),
    ("ERROR_PRINTER_DRIVER_IN_USE", 3001, "The specified printer driver is currently in use."),
    ("ERROR_SPOOL_FILE_NOT_FOUND", 3002, "The spool file was not found."),
    ("ERROR_SPL_NO_STARTDOC", 3003, "A StartDocPrinter call was not issued."),
    ("ERROR_SPL_NO_ADDJOB", 3004, "An AddJob call was not issued."),
    ("ERROR_PRINT_PROCESSOR_ALREADY_INSTALLED", 3005, "The specified print processor has already been installed."),
    ("ERROR_PRINT_MONITOR_ALREADY_INSTALLED", 3006, "The specified print monitor has already been installed."),
    ("ERROR_INVALID_PRINT_MONITOR", 3007, "The specified print monitor does not have the required functions."),
    ("ERROR_PRINT_MONITOR_IN_USE", 3008, "The specified print monitor is currently in use."),
    ("ERROR_PRINTER_HAS_JOBS_QUEUED", 3009, "The requested operation is not allowed when there are jobs queued to the printer."),
    ("ERROR_SUCCESS_REBOOT_REQUIRED", 3010, "The requested operation is successful. Changes will not be effective until the system is rebooted."),
    ("ERROR_SUCCESS_RESTART_REQUIRED", 3011, "The requested operation is successful. Changes will not be effective until the service is restarted."),
    ("ERROR_PRINTER_NOT_FOUND", 3012, "No printers were found."),
    ("ERROR_IO_REISSUE_AS_CACHED", 3950, "Reissue the given operation as a cached IO operation."),
    ("ERROR_WINS_INTERNAL", 4000, "WINS encountered an error while processing the command."),
    ("ERROR_CAN_NOT_DEL_LOCAL_WINS", 4001, "The local WINS cannot be deleted."),
    ("ERROR_STATIC_INIT", 4002, "The importation from the file failed."),
    ("ERROR_INC_BACKUP", 4003, "The backup failed. Was a full backup done before?"),
    ("ERROR_FULL_BACKUP", 4004, "The backup failed. Check the directory to which you are backing the database."),
    ("ERROR_REC_NON_EXISTENT", 4005, "The name does not exist in the WINS database."),
    ("ERROR_RPL_NOT_ALLOWED", 4006, "Replication with a nonconfigured partner is not allowed."),
    ("ERROR_DHCP_ADDRESS_CONFLICT", 4100, "The DHCP client has obtained an IP address that is already in use on the network."),
    ("ERROR_WMI_GUID_NOT_FOUND", 4200, "The GUID passed was not recognized as valid by a WMI data provider."),
    ("ERROR_WMI_INSTANCE_NOT_FOUND", 4201, "The instance name passed was not recognized as valid by a WMI data provider."),
    ("ERROR_WMI_ITEMID_NOT_FOUND", 4202, "The data item ID passed was not recognized as valid by a WMI data provider."),
    ("ERROR_WMI_TRY_AGAIN", 4203, "The WMI request could not be completed and should be retried."),
    ("ERROR_WMI_DP_NOT_FOUND", 4204, "The WMI data provider could not be located."),
    ("ERROR_NOT_A_REPARSE_POINT", 4390, "The file or directory is not a reparse point."),
    ("ERROR_REPARSE_ATTRIBUTE_CONFLICT", 4391, "The reparse point attribute cannot be set because it conflicts with an existing attribute."),
    ("ERROR_INVALID_REPARSE_DATA", 4392, "The data present in the reparse point buffer is invalid."),
    ("ERROR_REPARSE_TAG_INVALID", 4393, "The tag present in the reparse point buffer is invalid."),
    ("ERROR_REPARSE_TAG_MISMATCH", 4394, "There is a mismatch between the tag specified in the request and the tag present in the reparse point."),
    ("ERROR_VOLUME_NOT_SIS_ENABLED", 4500, "Single Instance Storage is not available on this volume."),
    ("ERROR_DEPENDENT_RESOURCE_EXISTS", 5001, "The operation cannot be completed because other resources are dependent on this resource."),
    ("ERROR_DEPENDENCY_NOT_FOUND", 5002, "The cluster resource dependency cannot be found."),
    ("ERROR_DEPENDENCY_ALREADY_EXISTS", 5003, "The cluster resource cannot be made dependent on the specified resource because it is already dependent."),
    ("ERROR_RESOURCE_NOT_ONLINE", 5004, "The cluster resource is not online."),
    ("ERROR_HOST_NODE_NOT_AVAILABLE", 5005, "A cluster node is not available for this operation."),
    ("ERROR_RESOURCE_NOT_AVAILABLE", 5006, "The cluster resource is not available."),
    ("ERROR_RESOURCE_NOT_FOUND", 5007, "The cluster resource could not be found."),
    ("ERROR_SHUTDOWN_CLUSTER", 5008, "The cluster is being shut down."),
    ("ERROR_CANT_EVICT_ACTIVE_NODE", 5009, "A cluster node cannot be evicted from the cluster unless the node is down or it is the last node."),
    ("ERROR_OBJECT_ALREADY_EXISTS", 5010, "The object already exists."),
    ("ERROR_OBJECT_IN_LIST", 5011, "The object is already in the list."),
    ("ERROR_GROUP_NOT_AVAILABLE", 5012, "The cluster group is not available for any new requests."),
    ("ERROR_GROUP_NOT_FOUND", 5013, "The cluster group could not be found."),
    ("ERROR_GROUP_NOT_ONLINE", 5014, "The operation could not be completed because the cluster group is not online."),
    ("ERROR_ENCRYPTION_FAILED", 6000, "The specified file could not be encrypted."),
    ("ERROR_DECRYPTION_FAILED", 6001, "The specified file could not be decrypted."),
    ("ERROR_FILE_ENCRYPTED", 6002, "The specified file is encrypted and the user does not have the ability to decrypt it."),
    ("ERROR_NO_RECOVERY_POLICY", 6003, "There is no valid encryption recovery policy configured for this system."),
    ("ERROR_NO_EFS", 6004, "The required encryption driver is not loaded for this system."),
    ("ERROR_WRONG_EFS", 6005, "The file was encrypted with a different encryption driver than is currently loaded."),
    ("ERROR_NO_USER_KEYS", 6006, "There are no EFS keys defined for the user."),
    ("ERROR_FILE_NOT_ENCRYPTED", 6007, "The specified file is not encrypted."),
    ("ERROR_NOT_EXPORT_FORMAT", 6008, "The specified file is not in the defined EFS export format."),
    ("ERROR_FILE_READ_ONLY", 6009, "The specified file is read only."),
    ("ERROR_DIR_EFS_DISALLOWED", 6010, "The directory has been disabled for encryption."),
    ("ERROR_FILE_NOT_ENCRYPTED_BY_EFS", 6011, "The server is not trusted for remote encryption operation."),
    ("ERROR_NO_BROWSER_SERVERS_FOUND", 6118, "The list of servers for this workgroup is not currently available."),
    ("ERROR_TRANSACTIONAL_CONFLICT", 6800, "The function attempted to use a name that is reserved for use by another transaction."),
    ("ERROR_RM_NOT_ACTIVE", 6801, "Transaction support within the specified resource manager is not started or was shut down due to an error."),
    ("ERROR_RM_METADATA_CORRUPT", 6802, "The metadata of the RM has been corrupted. The RM will not function."),
    ("ERROR_DIRECTORY_NOT_RM", 6803, "The specified directory does not contain a resource manager."),
    ("ERROR_TRANSACTIONS_UNSUPPORTED_REMOTE", 6805, "The remote server or share does not support transacted file operations."),
    ("ERROR_LOG_RESIZE_INVALID_SIZE", 6806, "The requested log size is invalid."),
    ("ERROR_OBJECT_NO_LONGER_EXISTS", 6807, "The object (file, stream, link) corresponding to the handle has been deleted by a Transaction Savepoint Rollback."),
    ("ERROR_CTX_WINSTATION_NAME_INVALID", 7001, "The specified session name is invalid."),
    ("ERROR_CTX_INVALID_PD", 7002, "The specified protocol driver is invalid."),
    ("ERROR_CTX_PD_NOT_FOUND", 7003, "The specified protocol driver was not found in the system path."),
    ("ERROR_CTX_WD_NOT_FOUND", 7004, "The specified terminal connection driver was not found in the system path."),
    ("ERROR_CTX_CANNOT_MAKE_EVENTLOG_ENTRY", 7005, "A registry key for event logging could not be created for this session."),
    ("ERROR_CTX_SERVICE_NAME_COLLISION", 7006, "A service with the same name already exists on the system."),
    ("ERROR_CTX_CLOSE_PENDING", 7007, "A close operation is pending on the session."),
    ("ERROR_CTX_NO_OUTBUF", 7008, "There are no free output buffers available."),
    ("ERROR_CTX_MODEM_INF_NOT_FOUND", 7009, "The MODEM.INF file was not found."),
    ("ERROR_CTX_INVALID_MODEMNAME", 7010, "The modem name was not found in the MODEM.INF file."),
    ("ERROR_DS_NOT_INSTALLED", 8200, "An error occurred while installing the directory service."),
    ("ERROR_DS_MEMBERSHIP_EVALUATED_LOCALLY", 8201, "The directory service evaluated group memberships locally."),
    ("ERROR_DS_NO_ATTRIBUTE_OR_VALUE", 8202, "The specified directory service attribute or value does not exist."),
    ("ERROR_DS_INVALID_ATTRIBUTE_SYNTAX", 8203, "The attribute syntax specified to the directory service is invalid."),
    ("ERROR_DS_ATTRIBUTE_TYPE_UNDEFINED", 8204, "The attribute type specified to the directory service is not defined."),
    ("ERROR_DS_ATTRIBUTE_OR_VALUE_EXISTS", 8205, "The specified directory service attribute or value already exists."),
    ("ERROR_DS_BUSY", 8206, "The directory service is busy."),
    ("ERROR_DS_UNAVAILABLE", 8207, "The directory service is unavailable."),
    ("ERROR_DS_NO_RIDS_ALLOCATED", 8208, "The directory service was unable to allocate a relative identifier."),
    ("ERROR_DS_NO_MORE_RIDS", 8209, "The directory service has exhausted the pool of relative identifiers."),
    ("ERROR_DS_INCORRECT_ROLE_OWNER", 8210, "The requested operation could not be performed because the directory service is not the master for that type of operation."),
    ("ERROR_DS_RIDMGR_INIT_ERROR", 8211, "The directory service was unable to initialize the subsystem that allocates relative identifiers."),
    ("ERROR_DS_OBJ_CLASS_VIOLATION", 8212, "The requested operation did not satisfy one or more constraints associated with the class of the object."),
    ("ERROR_DS_CANT_ON_NON_LEAF", 8213, "The directory service can perform the requested operation only on a leaf object."),
    ("ERROR_DS_CANT_ON_RDN", 8214, "The directory service cannot perform the requested operation on the RDN attribute of an object."),
    ("ERROR_DS_CANT_MOD_OBJ_CLASS", 8215, "The directory service detected an attempt to modify the object class of an object."),
    ("ERROR_DS_CROSS_DOM_MOVE_ERROR", 8216, "The requested cross-domain move operation could not be performed."),
    ("ERROR_DS_GC_NOT_AVAILABLE", 8217, "Unable to contact the global catalog server."),
    ("DNS_ERROR_RCODE_FORMAT_ERROR", 9001, "DNS server unable to interpret format."),
    ("DNS_ERROR_RCODE_SERVER_FAILURE", 9002, "DNS server failure."),
    ("DNS_ERROR_RCODE_NAME_ERROR", 9003, "DNS name does not exist."),
    ("DNS_ERROR_RCODE_NOT_IMPLEMENTED", 9004, "DNS request not supported by name server."),
    ("DNS_ERROR_RCODE_REFUSED", 9005, "DNS operation refused."),
    ("DNS_INFO_NO_RECORDS", 9501, "No records found for given DNS query."),
    ("DNS_ERROR_BAD_PACKET", 9502, "Bad DNS packet."),
    ("DNS_ERROR_NO_PACKET", 9503, "No DNS packet."),
    ("DNS_ERROR_RCODE", 9504, "DNS error, check rcode."),
    ("DNS_ERROR_UNSECURE_PACKET", 9505, "Unsecured DNS packet."),
    ("WSAEINTR", 10004, "A blocking operation was interrupted by a call to WSACancelBlockingCall."),
    ("WSAEBADF", 10009, "The file handle supplied is not valid."),
    ("WSAEACCES", 10013, "An attempt was made to access a socket in a way forbidden by its access permissions."),
    ("WSAEFAULT", 10014, "The system detected an invalid pointer address in attempting to use a pointer argument in a call."),
    ("WSAEINVAL", 10022, "An invalid argument was supplied."),
    ("WSAEMFILE", 10024, "Too many open sockets."),
    ("WSAEWOULDBLOCK", 10035, "A non-blocking socket operation could not be completed immediately."),
    ("WSAEINPROGRESS", 10036, "A blocking operation is currently executing."),
    ("WSAEALREADY", 10037, "An operation was attempted on a non-blocking socket that already had an operation in progress."),
    ("WSAENOTSOCK", 10038, "An operation was attempted on something that is not a socket."),
    ("WSAEDESTADDRREQ", 10039, "A required address was omitted from an operation on a socket."),
    ("WSAEMSGSIZE", 10040, "A message sent on a datagram socket was larger than the internal message buffer or some other network limit."),
    ("WSAEPROTOTYPE", 10041, "A protocol was specified in the socket function call that does not support the semantics of the socket type requested."),
    ("WSAENOPROTOOPT", 10042, "An unknown, invalid, or unsupported option or level was specified in a getsockopt or setsockopt call."),
    ("WSAEPROTONOSUPPORT", 10043, "The requested protocol has not been configured into the system, or no implementation for it exists."),
    ("WSAESOCKTNOSUPPORT", 10044, "The support for the specified socket type does not exist in this address family."),
    ("WSAEOPNOTSUPP", 10045, "The attempted operation is not supported for the type of object referenced."),
    ("WSAEPFNOSUPPORT", 10046, "The protocol family has not been configured into the system or no implementation for it exists."),
    ("WSAEAFNOSUPPORT", 10047, "An address incompatible with the requested protocol was used."),
    ("WSAEADDRINUSE", 10048, "Only one usage of each socket address (protocol/network address/port) is normally permitted."),
    ("WSAEADDRNOTAVAIL", 10049, "The requested address is not valid in its context."),
    ("WSAENETDOWN", 10050, "A socket operation encountered a dead network."),
    ("WSAENETUNREACH", 10051, "A socket operation was attempted to an unreachable network."),
    ("WSAENETRESET", 10052, "The connection has been broken due to keep-alive activity detecting a failure while the operation was in progress."),
    ("WSAECONNABORTED", 10053, "An established connection was aborted by the software in your host machine."),
    ("WSAECONNRESET", 10054, "An existing connection was forcibly closed by the remote host."),
    ("WSAENOBUFS", 10055, "An operation on a socket could not be performed because the system lacked sufficient buffer space or because a queue was full."),
    ("WSAEISCONN", 10056, "A connect request was made on an already connected socket."),
    ("WSAENOTCONN", 10057, "A request to send or receive data was disallowed because the socket is not connected."),
    ("WSAESHUTDOWN", 10058, "A request to send or receive data was disallowed because the socket had already been shut down."),
    ("WSAETOOMANYREFS", 10059, "Too many references to some kernel object."),
    ("WSAETIMEDOUT", 10060, "A connection attempt failed because the connected party did not properly respond after a period of time."),
    ("WSAECONNREFUSED", 10061, "No connection could be made because the target machine actively refused it."),
    ("WSAELOOP", 10062, "Cannot translate name."),
    ("WSAENAMETOOLONG", 10063, "Name component or name was too long."),
    ("WSAEHOSTDOWN", 10064, "A socket operation failed because the destination host was down."),
    ("WSAEHOSTUNREACH", 10065, "A socket operation was attempted to an unreachable host."),
    ("WSAENOTEMPTY", 10066, "Cannot remove a directory that is not empty."),
    ("WSAEPROCLIM", 10067, "A Windows Sockets implementation may have a limit on the number of applications that may use it simultaneously."),
    ("WSAEUSERS", 10068, "Ran out of quota."),
    ("WSAEDQUOT", 10069, "Ran out of disk quota."),
    ("WSAESTALE", 10070, "File handle reference is no longer available."),
    ("WSAEREMOTE", 10071, "Item is not available locally."),
    ("WSASYSNOTREADY", 10091, "WSAStartup cannot function at this time because the underlying system it uses to provide network services is currently unavailable."),
    ("WSAVERNOTSUPPORTED", 10092, "The Windows Sockets version requested is not supported."),
    ("WSANOTINITIALISED", 10093, "Either the application has not called WSAStartup, or WSAStartup failed."),
    ("WSAEDISCON", 10101, "Returned by WSARecv or WSARecvFrom to indicate the remote party has initiated a graceful shutdown sequence."),
    ("WSAENOMORE", 10102, "No more results can be returned by WSALookupServiceNext."),
    ("WSAECANCELLED", 10103, "A call to WSALookupServiceEnd was made while this call was still processing. The call has been canceled."),
    ("WSAEINVALIDPROCTABLE", 10104, "The procedure call table is invalid."),
    ("WSAEINVALIDPROVIDER", 10105, "The requested service provider is invalid."),
    ("WSAEPROVIDERFAILEDINIT", 10106, "The requested service provider could not be loaded or initialized."),
    ("WSASYSCALLFAILURE", 10107, "A system call that should never fail has failed."),
    ("WSASERVICE_NOT_FOUND", 10108, "No such service is known. The service cannot be found in the specified name space."),
    ("WSATYPE_NOT_FOUND", 10109, "The specified class was not found."),
    ("WSA_E_NO_MORE", 10110, "No more results can be returned by WSALookupServiceNext."),
    ("WSA_E_CANCELLED", 10111, "A call to WSALookupServiceEnd was made while this call was still processing. The call has been canceled."),
    ("WSAEREFUSED", 10112, "A database query failed because it was actively refused."),
    ("WSAHOST_NOT_FOUND", 11001, "No such host is known."),
    ("WSATRY_AGAIN", 11002, "This is usually a temporary error during hostname resolution and means that the local server did not receive a response from an authoritative server."),
    ("WSANO_RECOVERY", 11003, "A non-recoverable error occurred during a database lookup."),
    ("WSANO_DATA", 11004, "The requested name is valid, but no data of the requested type was found."),
    ("ERROR_IPSEC_QM_POLICY_EXISTS", 13000, "The specified quick mode policy already exists."),
    ("ERROR_IPSEC_QM_POLICY_NOT_FOUND", 13001, "The specified quick mode policy was not found."),
    ("ERROR_IPSEC_QM_POLICY_IN_USE", 13002, "The specified quick mode policy is being used."),
    ("ERROR_SXS_SECTION_NOT_FOUND", 14000, "The requested section was not present in the activation context."),
    ("ERROR_SXS_CANT_GEN_ACTCTX", 14001, "The application has failed to start because its side-by-side configuration is incorrect."),
    ("ERROR_SXS_INVALID_ACTCTXDATA_FORMAT", 14002, "The application binding data format is invalid."),
    ("ERROR_SXS_ASSEMBLY_NOT_FOUND", 14003, "The referenced assembly is not installed on your system."),
    ("ERROR_SXS_MANIFEST_FORMAT_ERROR", 14004, "The manifest file does not begin with the required tag and format information."),
    ("ERROR_SXS_MANIFEST_PARSE_ERROR", 14005, "The manifest file contains one or more syntax errors."),
    ("ERROR_SXS_ACTIVATION_CONTEXT_DISABLED", 14006, "The application attempted to activate a disabled activation context."),
    ("ERROR_SXS_KEY_NOT_FOUND", 14007, "The requested lookup key was not found in any active activation context."),
    ("ERROR_EVT_INVALID_CHANNEL_PATH", 15000, "The specified channel path is invalid."),
    ("ERROR_EVT_INVALID_QUERY", 15001, "The specified query is invalid."),
    ("ERROR_EVT_PUBLISHER_METADATA_NOT_FOUND", 15002, "The publisher metadata cannot be found in the resource."),
    ("ERROR_EVT_EVENT_TEMPLATE_NOT_FOUND", 15003, "The template for an event definition cannot be found in the resource."),
    ("ERROR_EVT_INVALID_PUBLISHER_NAME", 15004, "The specified publisher name is invalid."),
    ("ERROR_EVT_CHANNEL_NOT_FOUND", 15007, "The specified channel could not be found."),
    ("ERROR_MUI_FILE_NOT_FOUND", 15100, "The resource loader failed to find the MUI file."),
    ("ERROR_MUI_INVALID_FILE", 15101, "The resource loader failed to load the MUI file because the file failed pass validation."),
    ("ERROR_RESOURCE_ENUM_USER_STOP", 15106, "User stopped resource enumeration."),
    ("ERROR_INSTALL_OPEN_PACKAGE_FAILED", 15600, "The package could not be opened."),
    ("ERROR_INSTALL_PACKAGE_NOT_FOUND", 15601, "The package could not be found."),
    ("ERROR_INSTALL_INVALID_PACKAGE", 15602, "The package data is invalid."),
    ("ERROR_INSTALL_RESOLVE_DEPENDENCY_FAILED", 15603, "The package failed update, dependency or conflict validation."),
    ("ERROR_INSTALL_OUT_OF_DISK_SPACE", 15604, "There is not enough disk space on your computer."),
    ("ERROR_INSTALL_NETWORK_FAILURE", 15605, "There was a problem downloading your product."),
    ("ERROR_INSTALL_REGISTRATION_FAILURE", 15606, "The package could not be registered."),
    ("ERROR_INSTALL_DEREGISTRATION_FAILURE", 15607, "The package could not be unregistered."),
    ("ERROR_INSTALL_CANCEL", 15608, "The user cancelled the install request."),
    ("ERROR_INSTALL_FAILED", 15609, "Install failed. Please contact your software vendor."),
    ("ERROR_REMOVE_FAILED", 15610, "Removal failed. Please contact your software vendor."),
    ("ERROR_PACKAGE_ALREADY_EXISTS", 15611, "The provided package is already installed, and reinstallation of the package was blocked."),
    ("ERROR_NEEDS_REMEDIATION", 15612, "The application cannot be started. Try reinstalling the application to fix the problem."),
];
