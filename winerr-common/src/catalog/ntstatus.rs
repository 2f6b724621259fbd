//! Built-in NTSTATUS definitions.
//!
//! Rows are grouped by severity, then by facility. Aliases
//! that share a value with an earlier row (`STATUS_WAIT_0`,
//! `STATUS_ABANDONED_WAIT_0`, ...) are left out: a catalog holds one entry per
//! value.

use super::TableEntry;

pub const TABLE: &[TableEntry] = &[
    // =========================================================================
    // Success (severity 0)
    // =========================================================================
    ("STATUS_SUCCESS", 0x0000_0000, "The operation completed successfully."),
    ("STATUS_WAIT_1", 0x0000_0001, "The caller specified WaitAny for WaitType and one of the dispatcher objects in the Object array has been set to the signaled state."),
    ("STATUS_WAIT_2", 0x0000_0002, "The caller specified WaitAny for WaitType and one of the dispatcher objects in the Object array has been set to the signaled state."),
    ("STATUS_WAIT_3", 0x0000_0003, "The caller specified WaitAny for WaitType and one of the dispatcher objects in the Object array has been set to the signaled state."),
    ("STATUS_WAIT_63", 0x0000_003F, "The caller specified WaitAny for WaitType and one of the dispatcher objects in the Object array has been set to the signaled state."),
    ("STATUS_ABANDONED", 0x0000_0080, "The caller attempted to wait for a mutex that has been abandoned."),
    ("STATUS_ABANDONED_WAIT_63", 0x0000_00BF, "The caller attempted to wait for a mutex that has been abandoned."),
    ("STATUS_USER_APC", 0x0000_00C0, "A user-mode APC was delivered before the given Interval expired."),
    ("STATUS_KERNEL_APC", 0x0000_0100, "The delay completed because the thread was alerted."),
    ("STATUS_ALERTED", 0x0000_0101, "The delay completed because the thread was alerted."),
    ("STATUS_TIMEOUT", 0x0000_0102, "The given Timeout interval expired."),
    ("STATUS_PENDING", 0x0000_0103, "The operation that was requested is pending completion."),
    ("STATUS_REPARSE", 0x0000_0104, "A reparse should be performed by the Object Manager because the name of the file resulted in a symbolic link."),
    ("STATUS_MORE_ENTRIES", 0x0000_0105, "Returned by enumeration APIs to indicate more information is available to successive calls."),
    ("STATUS_NOT_ALL_ASSIGNED", 0x0000_0106, "Indicates not all privileges or groups that are referenced are assigned to the caller."),
    ("STATUS_SOME_NOT_MAPPED", 0x0000_0107, "Some of the information to be translated has not been translated."),
    ("STATUS_OPLOCK_BREAK_IN_PROGRESS", 0x0000_0108, "An open/create operation completed while an opportunistic lock (oplock) break is underway."),
    ("STATUS_VOLUME_MOUNTED", 0x0000_0109, "A new volume has been mounted by a file system."),
    ("STATUS_RXACT_COMMITTED", 0x0000_010A, "This success level status indicates that the transaction state already exists for the registry subtree but that a transaction commit was previously aborted."),
    ("STATUS_NOTIFY_CLEANUP", 0x0000_010B, "Indicates that a notify change request has been completed due to closing the handle that made the notify change request."),
    ("STATUS_NOTIFY_ENUM_DIR", 0x0000_010C, "Indicates that a notify change request is being completed and that the information is not being returned in the caller's buffer."),
    ("STATUS_NO_QUOTAS_FOR_ACCOUNT", 0x0000_010D, "No system quota limits are specifically set for this account."),
    ("STATUS_PRIMARY_TRANSPORT_CONNECT_FAILED", 0x0000_010E, "A connect to the remote server failed on the primary transport but succeeded on an alternate transport."),
    ("STATUS_PAGE_FAULT_TRANSITION", 0x0000_0110, "The page fault was a transition fault."),
    ("STATUS_PAGE_FAULT_DEMAND_ZERO", 0x0000_0111, "The page fault was a demand zero fault."),
    ("STATUS_PAGE_FAULT_COPY_ON_WRITE", 0x0000_0112, "The page fault was a copy-on-write fault."),
    ("STATUS_PAGE_FAULT_GUARD_PAGE", 0x0000_0113, "The page fault was a guard page fault."),
    ("STATUS_PAGE_FAULT_PAGING_FILE", 0x0000_0114, "The page fault was satisfied by reading from a secondary storage device."),
    ("STATUS_CACHE_PAGE_LOCKED", 0x0000_0115, "The cached page was locked during operation."),
    ("STATUS_CRASH_DUMP", 0x0000_0116, "The crash dump exists in a paging file."),
    ("STATUS_BUFFER_ALL_ZEROS", 0x0000_0117, "The specified buffer contains all zeros."),
    ("STATUS_REPARSE_OBJECT", 0x0000_0118, "A reparse should be performed by the Object Manager because the name of the file resulted in a symbolic link."),
    ("STATUS_RESOURCE_REQUIREMENTS_CHANGED", 0x0000_0119, "The device has succeeded a query-stop and its resource requirements have changed."),
    ("STATUS_TRANSLATION_COMPLETE", 0x0000_0120, "The translator has translated these resources into the global space and no additional translations should be performed."),
    ("STATUS_DS_MEMBERSHIP_EVALUATED_LOCALLY", 0x0000_0121, "The directory service evaluated group memberships locally, because it was unable to contact a global catalog server."),
    ("STATUS_NOTHING_TO_TERMINATE", 0x0000_0122, "A process being terminated has no threads to terminate."),
    ("STATUS_PROCESS_NOT_IN_JOB", 0x0000_0123, "The specified process is not part of a job."),
    ("STATUS_PROCESS_IN_JOB", 0x0000_0124, "The specified process is part of a job."),
    ("STATUS_VOLSNAP_HIBERNATE_READY", 0x0000_0125, "The system is now ready for hibernation."),
    ("STATUS_FSFILTER_OP_COMPLETED_SUCCESSFULLY", 0x0000_0126, "A file system or file system filter driver has successfully completed an FsFilter operation."),
    ("STATUS_INTERRUPT_VECTOR_ALREADY_CONNECTED", 0x0000_0127, "The specified interrupt vector was already connected."),
    ("STATUS_INTERRUPT_STILL_CONNECTED", 0x0000_0128, "The specified interrupt vector is still connected."),
    ("STATUS_PROCESS_CLONED", 0x0000_0129, "The current process is a cloned process."),
    ("STATUS_FILE_LOCKED_WITH_ONLY_READERS", 0x0000_012A, "The file was locked and all users of the file can only read."),
    ("STATUS_FILE_LOCKED_WITH_WRITERS", 0x0000_012B, "The file was locked and at least one user of the file can write."),
    ("STATUS_RESOURCEMANAGER_READ_ONLY", 0x0000_0202, "The specified ResourceManager made no changes or updates to the resource under this transaction."),
    ("STATUS_WAIT_FOR_OPLOCK", 0x0000_0367, "An operation is blocked and waiting for an oplock."),
    ("DBG_EXCEPTION_HANDLED", 0x0001_0001, "Debugger handled the exception."),
    ("DBG_CONTINUE", 0x0001_0002, "The debugger continued."),
    ("STATUS_FLT_IO_COMPLETE", 0x001C_0001, "The IO was completed by a filter."),
    // =========================================================================
    // Informational (severity 1)
    // =========================================================================
    ("STATUS_OBJECT_NAME_EXISTS", 0x4000_0000, "An attempt was made to create an object but the object name already exists."),
    ("STATUS_THREAD_WAS_SUSPENDED", 0x4000_0001, "A thread termination occurred while the thread was suspended. The thread resumed, and termination proceeded."),
    ("STATUS_WORKING_SET_LIMIT_RANGE", 0x4000_0002, "An attempt was made to set the working set limit to a low value, but the range was adjusted."),
    ("STATUS_IMAGE_NOT_AT_BASE", 0x4000_0003, "The image file was mapped at a different address than the one specified in the image file, but fixups will still be performed."),
    ("STATUS_RXACT_STATE_CREATED", 0x4000_0004, "This informational level status indicates that a specified registry subtree transaction state did not yet exist and had to be created."),
    ("STATUS_SEGMENT_NOTIFICATION", 0x4000_0005, "A virtual DOS machine is loading, unloading, or moving an MS-DOS or Win16 program segment image."),
    ("STATUS_LOCAL_USER_SESSION_KEY", 0x4000_0006, "The session key obtained is a local session key because no network session key is available."),
    ("STATUS_BAD_CURRENT_DIRECTORY", 0x4000_0007, "The process cannot switch to the startup current directory. The current directory is being set to the default."),
    ("STATUS_SERIAL_MORE_WRITES", 0x4000_0008, "A serial I/O operation was completed by another write to a serial port."),
    ("STATUS_REGISTRY_RECOVERED", 0x4000_0009, "One of the files that contains the system registry data had to be recovered by using a log or alternate copy."),
    ("STATUS_FT_READ_RECOVERY_FROM_BACKUP", 0x4000_000A, "A Windows fault-tolerant disk driver recovered data from a redundant copy."),
    ("STATUS_FT_WRITE_RECOVERY", 0x4000_000B, "A Windows fault-tolerant disk driver recovered data by rewriting a sector."),
    ("STATUS_SERIAL_COUNTER_TIMEOUT", 0x4000_000C, "A serial I/O operation completed because the time-out period expired."),
    ("STATUS_NULL_LM_PASSWORD", 0x4000_000D, "The password provided is too short to meet the policy of the user account."),
    ("STATUS_IMAGE_MACHINE_TYPE_MISMATCH", 0x4000_000E, "The image file is valid but is for a machine type other than the current machine."),
    ("STATUS_RECEIVE_PARTIAL", 0x4000_000F, "The network transport returned partial data to its client. The remaining data will be sent later."),
    ("STATUS_RECEIVE_EXPEDITED", 0x4000_0010, "The network transport returned data to its client that was marked as expedited by the remote system."),
    ("STATUS_RECEIVE_PARTIAL_EXPEDITED", 0x4000_0011, "The network transport returned partial data to its client and this data was marked as expedited by the remote system."),
    ("STATUS_EVENT_DONE", 0x4000_0012, "The TDI indication has completed successfully."),
    ("STATUS_EVENT_PENDING", 0x4000_0013, "The TDI indication has entered the pending state."),
    ("STATUS_CHECKING_FILE_SYSTEM", 0x4000_0014, "Checking the file system."),
    ("STATUS_FATAL_APP_EXIT", 0x4000_0015, "The application exited with a fatal error."),
    ("STATUS_PREDEFINED_HANDLE", 0x4000_0016, "The specified registry key is referenced by a predefined handle."),
    ("STATUS_WAS_UNLOCKED", 0x4000_0017, "The page protection of a locked page was changed to No Access and the page was unlocked from memory and from the process."),
    ("STATUS_SERVICE_NOTIFICATION", 0x4000_0018, "A service notification was delivered."),
    ("STATUS_WAS_LOCKED", 0x4000_0019, "One of the pages to lock was already locked."),
    ("STATUS_LOG_HARD_ERROR", 0x4000_001A, "An application hard error was logged."),
    ("STATUS_ALREADY_WIN32", 0x4000_001B, "A Win32 process already exists."),
    ("STATUS_WX86_UNSIMULATE", 0x4000_001C, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_CONTINUE", 0x4000_001D, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_SINGLE_STEP", 0x4000_001E, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_BREAKPOINT", 0x4000_001F, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_EXCEPTION_CONTINUE", 0x4000_0020, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_EXCEPTION_LASTCHANCE", 0x4000_0021, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_EXCEPTION_CHAIN", 0x4000_0022, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_IMAGE_MACHINE_TYPE_MISMATCH_EXE", 0x4000_0023, "The image file is valid but is for a machine type other than the current machine."),
    ("STATUS_NO_YIELD_PERFORMED", 0x4000_0024, "A yield execution was performed and no thread was available to run."),
    ("STATUS_TIMER_RESUME_IGNORED", 0x4000_0025, "The resume flag to a timer API was ignored."),
    ("STATUS_ARBITRATION_UNHANDLED", 0x4000_0026, "The arbiter has deferred arbitration of these resources to its parent."),
    ("STATUS_CARDBUS_NOT_SUPPORTED", 0x4000_0027, "The device has detected a CardBus card in its slot."),
    ("STATUS_WX86_CREATEWX86TIB", 0x4000_0028, "An exception status code that is used by the Win32 x86 emulation subsystem."),
    ("STATUS_MP_PROCESSOR_MISMATCH", 0x4000_0029, "The CPUs in this multiprocessor system are not all the same revision level."),
    ("STATUS_HIBERNATED", 0x4000_002A, "The system was put into hibernation."),
    ("STATUS_RESUME_HIBERNATION", 0x4000_002B, "The system was resumed from hibernation."),
    ("STATUS_FIRMWARE_UPDATED", 0x4000_002C, "Windows has detected that the system firmware (BIOS) was updated."),
    ("STATUS_DRIVERS_LEAKING_LOCKED_PAGES", 0x4000_002D, "A device driver is leaking locked I/O pages and is causing system degradation."),
    ("STATUS_MESSAGE_RETRIEVED", 0x4000_002E, "The ALPC message being canceled has already been retrieved from the queue on the other side."),
    ("STATUS_SYSTEM_POWERSTATE_TRANSITION", 0x4000_002F, "The system power state is transitioning from one state to another."),
    ("STATUS_ALPC_CHECK_COMPLETION_LIST", 0x4000_0030, "The receive operation was successful. Check the ALPC completion list for the received message."),
    ("STATUS_SYSTEM_POWERSTATE_COMPLEX_TRANSITION", 0x4000_0031, "The system power state is transitioning from one state to another, passing through an intermediate state."),
    ("STATUS_ACCESS_AUDIT_BY_POLICY", 0x4000_0032, "Access to the object was granted as per policy but is audited."),
    ("STATUS_ABANDON_HIBERFILE", 0x4000_0033, "The hibernate file was invalidated and should be abandoned."),
    ("STATUS_BIZRULES_NOT_ENABLED", 0x4000_0034, "Business rule scripts are disabled for the calling application."),
    ("STATUS_HEURISTIC_DAMAGE_POSSIBLE", 0x4019_0001, "The transaction outcome is unknown and some of the transaction's work may have been damaged."),
    ("DBG_REPLY_LATER", 0x4001_0001, "The debugger will reply later."),
    ("DBG_UNABLE_TO_PROVIDE_HANDLE", 0x4001_0002, "The debugger cannot provide a handle."),
    ("DBG_TERMINATE_THREAD", 0x4001_0003, "The debugger terminated the thread."),
    ("DBG_TERMINATE_PROCESS", 0x4001_0004, "The debugger terminated the process."),
    ("DBG_CONTROL_C", 0x4001_0005, "The debugger obtained control of C."),
    ("DBG_PRINTEXCEPTION_C", 0x4001_0006, "The debugger printed an exception on control C."),
    ("DBG_RIPEXCEPTION", 0x4001_0007, "The debugger received a RIP exception."),
    ("DBG_CONTROL_BREAK", 0x4001_0008, "The debugger received a control break."),
    ("DBG_COMMAND_EXCEPTION", 0x4001_0009, "The debugger command communication exception."),
    ("DBG_PRINTEXCEPTION_WIDE_C", 0x4001_000A, "The debugger printed a wide-character exception on control C."),
    // =========================================================================
    // Warning (severity 2)
    // =========================================================================
    ("STATUS_GUARD_PAGE_VIOLATION", 0x8000_0001, "A page of memory that marks the end of a data structure, such as a stack or an array, has been accessed."),
    ("STATUS_DATATYPE_MISALIGNMENT", 0x8000_0002, "A data type misalignment was detected in a load or store instruction."),
    ("STATUS_BREAKPOINT", 0x8000_0003, "A breakpoint has been reached."),
    ("STATUS_SINGLE_STEP", 0x8000_0004, "A single step or trace operation has just been completed."),
    ("STATUS_BUFFER_OVERFLOW", 0x8000_0005, "The data was too large to fit into the specified buffer."),
    ("STATUS_NO_MORE_FILES", 0x8000_0006, "No more files were found which match the file specification."),
    ("STATUS_WAKE_SYSTEM_DEBUGGER", 0x8000_0007, "The system debugger was awakened by an interrupt."),
    ("STATUS_HANDLES_CLOSED", 0x8000_000A, "Handles to objects have been automatically closed because of the requested operation."),
    ("STATUS_NO_INHERITANCE", 0x8000_000B, "An access control list (ACL) contains no components that can be inherited."),
    ("STATUS_GUID_SUBSTITUTION_MADE", 0x8000_000C, "A GUID provided was not present in the system and a substitute was made."),
    ("STATUS_PARTIAL_COPY", 0x8000_000D, "Because of protection conflicts, not all the requested bytes could be copied."),
    ("STATUS_DEVICE_PAPER_EMPTY", 0x8000_000E, "The printer is out of paper."),
    ("STATUS_DEVICE_POWERED_OFF", 0x8000_000F, "The printer power has been turned off."),
    ("STATUS_DEVICE_OFF_LINE", 0x8000_0010, "The printer has been taken offline."),
    ("STATUS_DEVICE_BUSY", 0x8000_0011, "The device is currently busy."),
    ("STATUS_NO_MORE_EAS", 0x8000_0012, "No more extended attributes (EAs) were found for the file."),
    ("STATUS_INVALID_EA_NAME", 0x8000_0013, "The specified extended attribute (EA) name contains at least one illegal character."),
    ("STATUS_EA_LIST_INCONSISTENT", 0x8000_0014, "The extended attribute (EA) list is inconsistent."),
    ("STATUS_INVALID_EA_FLAG", 0x8000_0015, "An invalid extended attribute (EA) flag was set."),
    ("STATUS_VERIFY_REQUIRED", 0x8000_0016, "The media has changed and a verify operation is in progress; therefore, no reads or writes may be performed to the device, except those that are used in the verify operation."),
    ("STATUS_EXTRANEOUS_INFORMATION", 0x8000_0017, "The specified access control list (ACL) contained more information than was expected."),
    ("STATUS_RXACT_COMMIT_NECESSARY", 0x8000_0018, "This warning level status indicates that the transaction state already exists for the registry subtree, but that a transaction commit was previously aborted."),
    ("STATUS_NO_MORE_ENTRIES", 0x8000_001A, "No more entries are available from an enumeration operation."),
    ("STATUS_FILEMARK_DETECTED", 0x8000_001B, "A file mark was detected."),
    ("STATUS_MEDIA_CHANGED", 0x8000_001C, "The media may have changed."),
    ("STATUS_BUS_RESET", 0x8000_001D, "An I/O bus reset was detected."),
    ("STATUS_END_OF_MEDIA", 0x8000_001E, "The end of the media was encountered."),
    ("STATUS_BEGINNING_OF_MEDIA", 0x8000_001F, "The beginning of a tape or partition has been detected."),
    ("STATUS_MEDIA_CHECK", 0x8000_0020, "The media changed or the volume may need to be checked."),
    ("STATUS_SETMARK_DETECTED", 0x8000_0021, "A tape access reached a set mark."),
    ("STATUS_NO_DATA_DETECTED", 0x8000_0022, "During a tape access, the end of the data written is reached."),
    ("STATUS_REDIRECTOR_HAS_OPEN_HANDLES", 0x8000_0023, "The redirector is in use and cannot be unloaded."),
    ("STATUS_SERVER_HAS_OPEN_HANDLES", 0x8000_0024, "The server is in use and cannot be unloaded."),
    ("STATUS_ALREADY_DISCONNECTED", 0x8000_0025, "The specified connection has already been disconnected."),
    ("STATUS_LONGJUMP", 0x8000_0026, "A long jump has been executed."),
    ("STATUS_CLEANER_CARTRIDGE_INSTALLED", 0x8000_0027, "A cleaner cartridge is present in the tape library."),
    ("STATUS_PLUGPLAY_QUERY_VETOED", 0x8000_0028, "The Plug and Play query operation was not successful."),
    ("STATUS_UNWIND_CONSOLIDATE", 0x8000_0029, "A frame consolidation has been executed."),
    ("STATUS_REGISTRY_HIVE_RECOVERED", 0x8000_002A, "The registry hive (file) was corrupted but has been recovered. Some data might have been lost."),
    ("STATUS_DLL_MIGHT_BE_INSECURE", 0x8000_002B, "The application is attempting to run executable code from the module but the module may be insecure."),
    ("STATUS_DLL_MIGHT_BE_INCOMPATIBLE", 0x8000_002C, "The application is loading executable code from the module but the module may be incompatible."),
    ("STATUS_STOPPED_ON_SYMLINK", 0x8000_002D, "The create operation stopped after reaching a symbolic link."),
    ("STATUS_DEVICE_REQUIRES_CLEANING", 0x8000_0288, "The device has indicated that cleaning is necessary."),
    ("STATUS_DEVICE_DOOR_OPEN", 0x8000_0289, "The device has indicated that its door is open. Further operations require it closed and secured."),
    ("STATUS_DATA_LOST_REPAIR", 0x8000_0803, "Windows discovered a corruption in the file and that file has since been repaired. Data loss may have occurred."),
    ("DBG_EXCEPTION_NOT_HANDLED", 0x8001_0001, "The debugger did not handle the exception."),
    ("STATUS_CLUSTER_NODE_ALREADY_UP", 0x8013_0001, "The attempt to bring the cluster node up failed because it is already up."),
    ("STATUS_CLUSTER_NODE_ALREADY_DOWN", 0x8013_0002, "The attempt to bring the cluster node down failed because it is already down."),
    ("STATUS_CLUSTER_NETWORK_ALREADY_ONLINE", 0x8013_0003, "The cluster network is already online."),
    ("STATUS_CLUSTER_NETWORK_ALREADY_OFFLINE", 0x8013_0004, "The cluster network is already offline."),
    ("STATUS_CLUSTER_NODE_ALREADY_MEMBER", 0x8013_0005, "The cluster node is already a member of the cluster."),
    // =========================================================================
    // Error (severity 3)
    // =========================================================================
    ("STATUS_UNSUCCESSFUL", 0xC000_0001, "The requested operation was unsuccessful."),
    ("STATUS_NOT_IMPLEMENTED", 0xC000_0002, "The requested operation is not implemented."),
    ("STATUS_INVALID_INFO_CLASS", 0xC000_0003, "The specified information class is not a valid information class for the specified object."),
    ("STATUS_INFO_LENGTH_MISMATCH", 0xC000_0004, "The specified information record length does not match the length that is required for the specified information class."),
    ("STATUS_ACCESS_VIOLATION", 0xC000_0005, "The instruction referenced memory that could not be accessed."),
    ("STATUS_IN_PAGE_ERROR", 0xC000_0006, "The required data was not placed into memory because of an I/O error."),
    ("STATUS_PAGEFILE_QUOTA", 0xC000_0007, "The page file quota for the process has been exhausted."),
    ("STATUS_INVALID_HANDLE", 0xC000_0008, "An invalid HANDLE was specified."),
    ("STATUS_BAD_INITIAL_STACK", 0xC000_0009, "An invalid initial stack was specified in a call to NtCreateThread."),
    ("STATUS_BAD_INITIAL_PC", 0xC000_000A, "An invalid initial start address was specified in a call to NtCreateThread."),
    ("STATUS_INVALID_CID", 0xC000_000B, "An invalid client ID was specified."),
    ("STATUS_TIMER_NOT_CANCELED", 0xC000_000C, "An attempt was made to cancel or set a timer that has an associated APC and the specified thread is not the thread that originally set the timer."),
    ("STATUS_INVALID_PARAMETER", 0xC000_000D, "An invalid parameter was passed to a service or function."),
    ("STATUS_NO_SUCH_DEVICE", 0xC000_000E, "A device that does not exist was specified."),
    ("STATUS_NO_SUCH_FILE", 0xC000_000F, "The file does not exist."),
    ("STATUS_INVALID_DEVICE_REQUEST", 0xC000_0010, "The specified request is not a valid operation for the target device."),
    ("STATUS_END_OF_FILE", 0xC000_0011, "The end-of-file marker has been reached. There is no valid data in the file beyond this marker."),
    ("STATUS_WRONG_VOLUME", 0xC000_0012, "The wrong volume is in the drive."),
    ("STATUS_NO_MEDIA_IN_DEVICE", 0xC000_0013, "There is no disk in the drive."),
    ("STATUS_UNRECOGNIZED_MEDIA", 0xC000_0014, "The media in the drive may have been changed, or the disk format is not recognized."),
    ("STATUS_NONEXISTENT_SECTOR", 0xC000_0015, "The specified sector does not exist."),
    ("STATUS_MORE_PROCESSING_REQUIRED", 0xC000_0016, "The specified I/O request packet (IRP) cannot be disposed of because the I/O operation is not complete."),
    ("STATUS_NO_MEMORY", 0xC000_0017, "Not enough virtual memory or paging file quota is available to complete the specified operation."),
    ("STATUS_CONFLICTING_ADDRESSES", 0xC000_0018, "The specified address range conflicts with the address space."),
    ("STATUS_NOT_MAPPED_VIEW", 0xC000_0019, "The address range to unmap is not a mapped view."),
    ("STATUS_UNABLE_TO_FREE_VM", 0xC000_001A, "The virtual memory cannot be freed."),
    ("STATUS_UNABLE_TO_DELETE_SECTION", 0xC000_001B, "The specified section cannot be deleted."),
    ("STATUS_INVALID_SYSTEM_SERVICE", 0xC000_001C, "An invalid system service was specified in a system service call."),
    ("STATUS_ILLEGAL_INSTRUCTION", 0xC000_001D, "An attempt was made to execute an illegal instruction."),
    ("STATUS_INVALID_LOCK_SEQUENCE", 0xC000_001E, "An attempt was made to execute an invalid lock sequence."),
    ("STATUS_INVALID_VIEW_SIZE", 0xC000_001F, "An attempt was made to create a view for a section that is bigger than the section."),
    ("STATUS_INVALID_FILE_FOR_SECTION", 0xC000_0020, "The attributes of the specified mapping file for a section of memory cannot be read."),
    ("STATUS_ALREADY_COMMITTED", 0xC000_0021, "The specified address range is already committed."),
    ("STATUS_ACCESS_DENIED", 0xC000_0022, "A process has requested access to an object but has not been granted those access rights."),
    ("STATUS_BUFFER_TOO_SMALL", 0xC000_0023, "The buffer is too small to contain the entry. No information has been written to the buffer."),
    ("STATUS_OBJECT_TYPE_MISMATCH", 0xC000_0024, "There is a mismatch between the type of object that is required by the requested operation and the type of object that is specified in the request."),
    ("STATUS_NONCONTINUABLE_EXCEPTION", 0xC000_0025, "The instruction caused an exception that cannot be continued."),
    ("STATUS_INVALID_DISPOSITION", 0xC000_0026, "An invalid exception disposition was returned by an exception handler."),
    ("STATUS_UNWIND", 0xC000_0027, "Unwind exception code."),
    ("STATUS_BAD_STACK", 0xC000_0028, "An invalid or unaligned stack was encountered during an unwind operation."),
    ("STATUS_INVALID_UNWIND_TARGET", 0xC000_0029, "An invalid unwind target was encountered during an unwind operation."),
    ("STATUS_NOT_LOCKED", 0xC000_002A, "An attempt was made to unlock a page of memory that was not locked."),
    ("STATUS_PARITY_ERROR", 0xC000_002B, "A device parity error on an I/O operation."),
    ("STATUS_UNABLE_TO_DECOMMIT_VM", 0xC000_002C, "An attempt was made to decommit uncommitted virtual memory."),
    ("STATUS_NOT_COMMITTED", 0xC000_002D, "An attempt was made to change the attributes on memory that has not been committed."),
    ("STATUS_INVALID_PORT_ATTRIBUTES", 0xC000_002E, "Invalid object attributes specified to NtCreatePort or invalid port attributes specified to NtConnectPort."),
    ("STATUS_PORT_MESSAGE_TOO_LONG", 0xC000_002F, "The length of the message that was passed to NtRequestPort or NtRequestWaitReplyPort is longer than the maximum message that is allowed by the port."),
    ("STATUS_INVALID_PARAMETER_MIX", 0xC000_0030, "An invalid combination of parameters was specified."),
    ("STATUS_INVALID_QUOTA_LOWER", 0xC000_0031, "An attempt was made to lower a quota limit below the current usage."),
    ("STATUS_DISK_CORRUPT_ERROR", 0xC000_0032, "The file system structure on the disk is corrupt and unusable. Run the Chkdsk utility on the volume."),
    ("STATUS_OBJECT_NAME_INVALID", 0xC000_0033, "The object name is invalid."),
    ("STATUS_OBJECT_NAME_NOT_FOUND", 0xC000_0034, "The object name is not found."),
    ("STATUS_OBJECT_NAME_COLLISION", 0xC000_0035, "The object name already exists."),
    ("STATUS_PORT_DISCONNECTED", 0xC000_0037, "An attempt was made to send a message to a disconnected communication port."),
    ("STATUS_DEVICE_ALREADY_ATTACHED", 0xC000_0038, "An attempt was made to attach to a device that was already attached to another device."),
    ("STATUS_OBJECT_PATH_INVALID", 0xC000_0039, "The object path component was not a directory object."),
    ("STATUS_OBJECT_PATH_NOT_FOUND", 0xC000_003A, "The object path does not exist."),
    ("STATUS_OBJECT_PATH_SYNTAX_BAD", 0xC000_003B, "The object path component was not a directory object."),
    ("STATUS_DATA_OVERRUN", 0xC000_003C, "A data overrun error occurred."),
    ("STATUS_DATA_LATE_ERROR", 0xC000_003D, "A data late error occurred."),
    ("STATUS_DATA_ERROR", 0xC000_003E, "An error occurred in reading or writing data."),
    ("STATUS_CRC_ERROR", 0xC000_003F, "A cyclic redundancy check (CRC) checksum error occurred."),
    ("STATUS_SECTION_TOO_BIG", 0xC000_0040, "The specified section is too big to map the file."),
    ("STATUS_PORT_CONNECTION_REFUSED", 0xC000_0041, "The NtConnectPort request is refused."),
    ("STATUS_INVALID_PORT_HANDLE", 0xC000_0042, "The type of port handle is invalid for the operation that is requested."),
    ("STATUS_SHARING_VIOLATION", 0xC000_0043, "A file cannot be opened because the share access flags are incompatible."),
    ("STATUS_QUOTA_EXCEEDED", 0xC000_0044, "Insufficient quota exists to complete the operation."),
    ("STATUS_INVALID_PAGE_PROTECTION", 0xC000_0045, "The specified page protection was not valid."),
    ("STATUS_MUTANT_NOT_OWNED", 0xC000_0046, "An attempt to release a mutant object was made by a thread that was not the owner of the mutant object."),
    ("STATUS_SEMAPHORE_LIMIT_EXCEEDED", 0xC000_0047, "An attempt was made to release a semaphore such that its maximum count would have been exceeded."),
    ("STATUS_PORT_ALREADY_SET", 0xC000_0048, "An attempt was made to set the DebugPort or ExceptionPort of a process, but a port already exists in the process."),
    ("STATUS_SECTION_NOT_IMAGE", 0xC000_0049, "An attempt was made to query image information on a section that does not map an image."),
    ("STATUS_SUSPEND_COUNT_EXCEEDED", 0xC000_004A, "An attempt was made to suspend a thread whose suspend count was at its maximum."),
    ("STATUS_THREAD_IS_TERMINATING", 0xC000_004B, "An attempt was made to suspend a thread that has begun termination."),
    ("STATUS_BAD_WORKING_SET_LIMIT", 0xC000_004C, "An attempt was made to set the working set limit to an invalid value."),
    ("STATUS_INCOMPATIBLE_FILE_MAP", 0xC000_004D, "A section was created to map a file that is not compatible with an already existing section that maps the same file."),
    ("STATUS_SECTION_PROTECTION", 0xC000_004E, "A view to a section specifies a protection that is incompatible with the protection of the initial view."),
    ("STATUS_EAS_NOT_SUPPORTED", 0xC000_004F, "An operation involving EAs failed because the file system does not support EAs."),
    ("STATUS_EA_TOO_LARGE", 0xC000_0050, "An EA operation failed because the EA set is too large."),
    ("STATUS_NONEXISTENT_EA_ENTRY", 0xC000_0051, "An EA operation failed because the name or EA index is invalid."),
    ("STATUS_NO_EAS_ON_FILE", 0xC000_0052, "The file for which EAs were requested has no EAs."),
    ("STATUS_EA_CORRUPT_ERROR", 0xC000_0053, "The EA is corrupt and cannot be read."),
    ("STATUS_FILE_LOCK_CONFLICT", 0xC000_0054, "A requested read/write cannot be granted due to a conflicting file lock."),
    ("STATUS_LOCK_NOT_GRANTED", 0xC000_0055, "A requested file lock cannot be granted due to other existing locks."),
    ("STATUS_DELETE_PENDING", 0xC000_0056, "A non-close operation has been requested of a file object that has a delete pending."),
    ("STATUS_CTL_FILE_NOT_SUPPORTED", 0xC000_0057, "An attempt was made to set the control attribute on a file that does not support it."),
    ("STATUS_UNKNOWN_REVISION", 0xC000_0058, "Indicates a revision number that was encountered or specified is not one that is known by the service."),
    ("STATUS_REVISION_MISMATCH", 0xC000_0059, "Indicates that two revision levels are incompatible."),
    ("STATUS_INVALID_OWNER", 0xC000_005A, "Indicates a particular security ID may not be assigned as the owner of an object."),
    ("STATUS_INVALID_PRIMARY_GROUP", 0xC000_005B, "Indicates a particular security ID may not be assigned as the primary group of an object."),
    ("STATUS_NO_IMPERSONATION_TOKEN", 0xC000_005C, "An attempt has been made to operate on an impersonation token by a thread that is not currently impersonating a client."),
    ("STATUS_CANT_DISABLE_MANDATORY", 0xC000_005D, "A mandatory group may not be disabled."),
    ("STATUS_NO_LOGON_SERVERS", 0xC000_005E, "No logon servers are currently available to service the logon request."),
    ("STATUS_NO_SUCH_LOGON_SESSION", 0xC000_005F, "A specified logon session does not exist. It may already have been terminated."),
    ("STATUS_NO_SUCH_PRIVILEGE", 0xC000_0060, "A specified privilege does not exist."),
    ("STATUS_PRIVILEGE_NOT_HELD", 0xC000_0061, "A required privilege is not held by the client."),
    ("STATUS_INVALID_ACCOUNT_NAME", 0xC000_0062, "The name provided is not a properly formed account name."),
    ("STATUS_USER_EXISTS", 0xC000_0063, "The specified account already exists."),
    ("STATUS_NO_SUCH_USER", 0xC000_0064, "The specified account does not exist."),
    ("STATUS_GROUP_EXISTS", 0xC000_0065, "The specified group already exists."),
    ("STATUS_NO_SUCH_GROUP", 0xC000_0066, "The specified group does not exist."),
    ("STATUS_MEMBER_IN_GROUP", 0xC000_0067, "The specified user account is already in the specified group account."),
    ("STATUS_MEMBER_NOT_IN_GROUP", 0xC000_0068, "The specified user account is not a member of the specified group account."),
    ("STATUS_LAST_ADMIN", 0xC000_0069, "Indicates the requested operation would disable or delete the last remaining administration account."),
    ("STATUS_WRONG_PASSWORD", 0xC000_006A, "When trying to update a password, this return status indicates that the value provided as the current password is not correct."),
    ("STATUS_ILL_FORMED_PASSWORD", 0xC000_006B, "When trying to update a password, this return status indicates that the value provided for the new password contains values that are not allowed in passwords."),
    ("STATUS_PASSWORD_RESTRICTION", 0xC000_006C, "When trying to update a password, this status indicates that some password update rule has been violated."),
    ("STATUS_LOGON_FAILURE", 0xC000_006D, "The attempted logon is invalid. This is either due to a bad username or authentication information."),
    ("STATUS_ACCOUNT_RESTRICTION", 0xC000_006E, "Indicates a referenced user name and authentication information are valid, but some user account restriction has prevented successful authentication."),
    ("STATUS_INVALID_LOGON_HOURS", 0xC000_006F, "The user account has time restrictions and may not be logged onto at this time."),
    ("STATUS_INVALID_WORKSTATION", 0xC000_0070, "The user account is restricted so that it may not be used to log on from the source workstation."),
    ("STATUS_PASSWORD_EXPIRED", 0xC000_0071, "The user account password has expired."),
    ("STATUS_ACCOUNT_DISABLED", 0xC000_0072, "The referenced account is currently disabled and may not be logged on to."),
    ("STATUS_NONE_MAPPED", 0xC000_0073, "None of the information to be translated has been translated."),
    ("STATUS_TOO_MANY_LUIDS_REQUESTED", 0xC000_0074, "The number of LUIDs requested may not be allocated with a single allocation."),
    ("STATUS_LUIDS_EXHAUSTED", 0xC000_0075, "Indicates there are no more LUIDs to allocate."),
    ("STATUS_INVALID_SUB_AUTHORITY", 0xC000_0076, "Indicates the sub-authority value is invalid for the particular use."),
    ("STATUS_INVALID_ACL", 0xC000_0077, "Indicates the ACL structure is not valid."),
    ("STATUS_INVALID_SID", 0xC000_0078, "Indicates the SID structure is not valid."),
    ("STATUS_INVALID_SECURITY_DESCR", 0xC000_0079, "Indicates the SECURITY_DESCRIPTOR structure is not valid."),
    ("STATUS_PROCEDURE_NOT_FOUND", 0xC000_007A, "Indicates the specified procedure address cannot be found in the DLL."),
    ("STATUS_INVALID_IMAGE_FORMAT", 0xC000_007B, "The image is either not designed to run on Windows or it contains an error."),
    ("STATUS_NO_TOKEN", 0xC000_007C, "An attempt was made to reference a token that does not exist."),
    ("STATUS_BAD_INHERITANCE_ACL", 0xC000_007D, "Indicates that an attempt to build either an inherited ACL or ACE was not successful."),
    ("STATUS_RANGE_NOT_LOCKED", 0xC000_007E, "The range specified in NtUnlockFile was not locked."),
    ("STATUS_DISK_FULL", 0xC000_007F, "An operation failed because the disk was full."),
    ("STATUS_SERVER_DISABLED", 0xC000_0080, "The GUID allocation server is disabled at the moment."),
    ("STATUS_SERVER_NOT_DISABLED", 0xC000_0081, "The GUID allocation server is enabled at the moment."),
    ("STATUS_TOO_MANY_GUIDS_REQUESTED", 0xC000_0082, "Too many GUIDs were requested from the allocation server at once."),
    ("STATUS_GUIDS_EXHAUSTED", 0xC000_0083, "The GUIDs could not be allocated because the Authority Agent was exhausted."),
    ("STATUS_INVALID_ID_AUTHORITY", 0xC000_0084, "The value provided was an invalid value for an identifier authority."),
    ("STATUS_AGENTS_EXHAUSTED", 0xC000_0085, "No more authority agent values are available for the particular identifier authority value."),
    ("STATUS_INVALID_VOLUME_LABEL", 0xC000_0086, "An invalid volume label has been specified."),
    ("STATUS_SECTION_NOT_EXTENDED", 0xC000_0087, "A mapped section could not be extended."),
    ("STATUS_NOT_MAPPED_DATA", 0xC000_0088, "Specified section to flush does not map a data file."),
    ("STATUS_RESOURCE_DATA_NOT_FOUND", 0xC000_0089, "Indicates the specified image file did not contain a resource section."),
    ("STATUS_RESOURCE_TYPE_NOT_FOUND", 0xC000_008A, "Indicates the specified resource type cannot be found in the image file."),
    ("STATUS_RESOURCE_NAME_NOT_FOUND", 0xC000_008B, "Indicates the specified resource name cannot be found in the image file."),
    ("STATUS_ARRAY_BOUNDS_EXCEEDED", 0xC000_008C, "Array bounds exceeded."),
    ("STATUS_FLOAT_DENORMAL_OPERAND", 0xC000_008D, "Floating-point denormal operand."),
    ("STATUS_FLOAT_DIVIDE_BY_ZERO", 0xC000_008E, "Floating-point division by zero."),
    ("STATUS_FLOAT_INEXACT_RESULT", 0xC000_008F, "Floating-point inexact result."),
    ("STATUS_FLOAT_INVALID_OPERATION", 0xC000_0090, "Floating-point invalid operation."),
    ("STATUS_FLOAT_OVERFLOW", 0xC000_0091, "Floating-point overflow."),
    ("STATUS_FLOAT_STACK_CHECK", 0xC000_0092, "Floating-point stack check."),
    ("STATUS_FLOAT_UNDERFLOW", 0xC000_0093, "Floating-point underflow."),
    ("STATUS_INTEGER_DIVIDE_BY_ZERO", 0xC000_0094, "Integer division by zero."),
    ("STATUS_INTEGER_OVERFLOW", 0xC000_0095, "Integer overflow."),
    ("STATUS_PRIVILEGED_INSTRUCTION", 0xC000_0096, "Privileged instruction."),
    ("STATUS_TOO_MANY_PAGING_FILES", 0xC000_0097, "An attempt was made to install more paging files than the system supports."),
    ("STATUS_FILE_INVALID", 0xC000_0098, "The volume for a file has been externally altered such that the opened file is no longer valid."),
    ("STATUS_ALLOTTED_SPACE_EXCEEDED", 0xC000_0099, "When a block of memory is allotted for future updates, such as the memory allocated to hold discretionary access control and primary group information, successive updates may exceed the amount of memory originally allotted."),
    ("STATUS_INSUFFICIENT_RESOURCES", 0xC000_009A, "Insufficient system resources exist to complete the API."),
    ("STATUS_DFS_EXIT_PATH_FOUND", 0xC000_009B, "An attempt has been made to open a DFS exit path control file."),
    ("STATUS_DEVICE_DATA_ERROR", 0xC000_009C, "There are bad blocks (sectors) on the hard disk."),
    ("STATUS_DEVICE_NOT_CONNECTED", 0xC000_009D, "There is bad cabling, non-termination, or the controller is not able to obtain access to the hard disk."),
    ("STATUS_DEVICE_POWER_FAILURE", 0xC000_009E, "Device power failure."),
    ("STATUS_FREE_VM_NOT_AT_BASE", 0xC000_009F, "Virtual memory cannot be freed because the base address is not the base of the region and a region size of zero was specified."),
    ("STATUS_MEMORY_NOT_ALLOCATED", 0xC000_00A0, "An attempt was made to free virtual memory that is not allocated."),
    ("STATUS_WORKING_SET_QUOTA", 0xC000_00A1, "The working set is not big enough to allow the requested pages to be locked."),
    ("STATUS_MEDIA_WRITE_PROTECTED", 0xC000_00A2, "The disk cannot be written to because it is write-protected."),
    ("STATUS_DEVICE_NOT_READY", 0xC000_00A3, "The drive is not ready for use; its door may be open."),
    ("STATUS_INVALID_GROUP_ATTRIBUTES", 0xC000_00A4, "The specified attributes are invalid or are incompatible with the attributes for the group as a whole."),
    ("STATUS_BAD_IMPERSONATION_LEVEL", 0xC000_00A5, "A specified impersonation level is invalid."),
    ("STATUS_CANT_OPEN_ANONYMOUS", 0xC000_00A6, "An attempt was made to open an anonymous-level token."),
    ("STATUS_BAD_VALIDATION_CLASS", 0xC000_00A7, "The validation information class requested was invalid."),
    ("STATUS_BAD_TOKEN_TYPE", 0xC000_00A8, "The type of a token object is inappropriate for its attempted use."),
    ("STATUS_BAD_MASTER_BOOT_RECORD", 0xC000_00A9, "The master boot record is invalid."),
    ("STATUS_INSTRUCTION_MISALIGNMENT", 0xC000_00AA, "An attempt was made to execute an instruction at an unaligned address and the host system does not support unaligned instruction references."),
    ("STATUS_INSTANCE_NOT_AVAILABLE", 0xC000_00AB, "The maximum named pipe instance count has been reached."),
    ("STATUS_PIPE_NOT_AVAILABLE", 0xC000_00AC, "An instance of a named pipe cannot be found in the listening state."),
    ("STATUS_INVALID_PIPE_STATE", 0xC000_00AD, "The named pipe is not in the connected or closing state."),
    ("STATUS_PIPE_BUSY", 0xC000_00AE, "The specified pipe is set to complete operations and there are current I/O operations queued so that it cannot be changed to queue operations."),
    ("STATUS_ILLEGAL_FUNCTION", 0xC000_00AF, "The specified handle is not open to the server end of the named pipe."),
    ("STATUS_PIPE_DISCONNECTED", 0xC000_00B0, "The specified named pipe is in the disconnected state."),
    ("STATUS_PIPE_CLOSING", 0xC000_00B1, "The specified named pipe is in the closing state."),
    ("STATUS_PIPE_CONNECTED", 0xC000_00B2, "The specified named pipe is in the connected state."),
    ("STATUS_PIPE_LISTENING", 0xC000_00B3, "The specified named pipe is in the listening state."),
    ("STATUS_INVALID_READ_MODE", 0xC000_00B4, "The specified named pipe is not in message mode."),
    ("STATUS_IO_TIMEOUT", 0xC000_00B5, "The specified I/O operation was not completed before the time-out period expired."),
    ("STATUS_FILE_FORCED_CLOSED", 0xC000_00B6, "The specified file has been closed by another process."),
    ("STATUS_PROFILING_NOT_STARTED", 0xC000_00B7, "Profiling is not started."),
    ("STATUS_PROFILING_NOT_STOPPED", 0xC000_00B8, "Profiling is not stopped."),
    ("STATUS_COULD_NOT_INTERPRET", 0xC000_00B9, "The passed ACL did not contain the minimum required information."),
    ("STATUS_FILE_IS_A_DIRECTORY", 0xC000_00BA, "The file that was specified as a target is a directory, and the caller specified that it could be anything but a directory."),
    ("STATUS_NOT_SUPPORTED", 0xC000_00BB, "The request is not supported."),
    ("STATUS_REMOTE_NOT_LISTENING", 0xC000_00BC, "This remote computer is not listening."),
    ("STATUS_DUPLICATE_NAME", 0xC000_00BD, "A duplicate name exists on the network."),
    ("STATUS_BAD_NETWORK_PATH", 0xC000_00BE, "The network path cannot be located."),
    ("STATUS_NETWORK_BUSY", 0xC000_00BF, "The network is busy."),
    ("STATUS_DEVICE_DOES_NOT_EXIST", 0xC000_00C0, "This device does not exist."),
    ("STATUS_TOO_MANY_COMMANDS", 0xC000_00C1, "The network BIOS command limit has been reached."),
    ("STATUS_ADAPTER_HARDWARE_ERROR", 0xC000_00C2, "An I/O adapter hardware error has occurred."),
    ("STATUS_INVALID_NETWORK_RESPONSE", 0xC000_00C3, "The network responded incorrectly."),
    ("STATUS_UNEXPECTED_NETWORK_ERROR", 0xC000_00C4, "An unexpected network error occurred."),
    ("STATUS_BAD_REMOTE_ADAPTER", 0xC000_00C5, "The remote adapter is not compatible."),
    ("STATUS_PRINT_QUEUE_FULL", 0xC000_00C6, "The print queue is full."),
    ("STATUS_NO_SPOOL_SPACE", 0xC000_00C7, "Space to store the file that is waiting to be printed is not available on the server."),
    ("STATUS_PRINT_CANCELLED", 0xC000_00C8, "The requested print file has been canceled."),
    ("STATUS_NETWORK_NAME_DELETED", 0xC000_00C9, "The network name was deleted."),
    ("STATUS_NETWORK_ACCESS_DENIED", 0xC000_00CA, "Network access is denied."),
    ("STATUS_BAD_DEVICE_TYPE", 0xC000_00CB, "The specified device type (LPT, for example) conflicts with the actual device type on the remote resource."),
    ("STATUS_BAD_NETWORK_NAME", 0xC000_00CC, "The specified share name cannot be found on the remote server."),
    ("STATUS_TOO_MANY_NAMES", 0xC000_00CD, "The name limit for the network adapter card of the local computer was exceeded."),
    ("STATUS_TOO_MANY_SESSIONS", 0xC000_00CE, "The network BIOS session limit was exceeded."),
    ("STATUS_SHARING_PAUSED", 0xC000_00CF, "File sharing has been temporarily paused."),
    ("STATUS_REQUEST_NOT_ACCEPTED", 0xC000_00D0, "No more connections can be made to this remote computer at this time because the computer has already accepted the maximum number of connections."),
    ("STATUS_REDIRECTOR_PAUSED", 0xC000_00D1, "Print or disk redirection is temporarily paused."),
    ("STATUS_NET_WRITE_FAULT", 0xC000_00D2, "A network data fault occurred."),
    ("STATUS_PROFILING_AT_LIMIT", 0xC000_00D3, "The number of active profiling objects is at the maximum and no more may be started."),
    ("STATUS_NOT_SAME_DEVICE", 0xC000_00D4, "An attempt was made to rename a file to a different directory on a different device."),
    ("STATUS_FILE_RENAMED", 0xC000_00D5, "The specified file has been renamed and thus cannot be modified."),
    ("STATUS_VIRTUAL_CIRCUIT_CLOSED", 0xC000_00D6, "The session with a remote server has been disconnected because the time-out interval for a request has expired."),
    ("STATUS_NO_SECURITY_ON_OBJECT", 0xC000_00D7, "Indicates an attempt was made to operate on the security of an object that does not have security associated with it."),
    ("STATUS_CANT_WAIT", 0xC000_00D8, "Used to indicate that an operation cannot continue without blocking for I/O."),
    ("STATUS_PIPE_EMPTY", 0xC000_00D9, "Used to indicate that a read operation was done on an empty pipe."),
    ("STATUS_CANT_ACCESS_DOMAIN_INFO", 0xC000_00DA, "Configuration information could not be read from the domain controller, either because the machine is unavailable or access has been denied."),
    ("STATUS_CANT_TERMINATE_SELF", 0xC000_00DB, "Indicates that a thread attempted to terminate itself by default (called NtTerminateThread with NULL) and it was the last thread in the current process."),
    ("STATUS_INVALID_SERVER_STATE", 0xC000_00DC, "Indicates the Sam Server was in the wrong state to perform the desired operation."),
    ("STATUS_INVALID_DOMAIN_STATE", 0xC000_00DD, "Indicates the domain was in the wrong state to perform the desired operation."),
    ("STATUS_INVALID_DOMAIN_ROLE", 0xC000_00DE, "This operation is only allowed for the primary domain controller of the domain."),
    ("STATUS_NO_SUCH_DOMAIN", 0xC000_00DF, "The specified domain did not exist."),
    ("STATUS_DOMAIN_EXISTS", 0xC000_00E0, "The specified domain already exists."),
    ("STATUS_DOMAIN_LIMIT_EXCEEDED", 0xC000_00E1, "An attempt was made to exceed the limit on the number of domains per server for this release."),
    ("STATUS_OPLOCK_NOT_GRANTED", 0xC000_00E2, "An error status returned when the opportunistic lock (oplock) request is denied."),
    ("STATUS_INVALID_OPLOCK_PROTOCOL", 0xC000_00E3, "An error status returned when an invalid opportunistic lock (oplock) acknowledgment is received by a file system."),
    ("STATUS_INTERNAL_DB_CORRUPTION", 0xC000_00E4, "This error indicates that the requested operation cannot be completed due to a catastrophic media failure or an on-disk data structure corruption."),
    ("STATUS_INTERNAL_ERROR", 0xC000_00E5, "An internal error occurred."),
    ("STATUS_GENERIC_NOT_MAPPED", 0xC000_00E6, "Indicates generic access types were contained in an access mask which should already be mapped to non-generic access types."),
    ("STATUS_BAD_DESCRIPTOR_FORMAT", 0xC000_00E7, "Indicates a security descriptor is not in the necessary format (absolute or self-relative)."),
    ("STATUS_INVALID_USER_BUFFER", 0xC000_00E8, "An access to a user buffer failed at an expected point in time."),
    ("STATUS_UNEXPECTED_IO_ERROR", 0xC000_00E9, "If an I/O error that is not defined in the standard FsRtl filter is returned, it is converted to this error."),
    ("STATUS_UNEXPECTED_MM_CREATE_ERR", 0xC000_00EA, "If an MM error that is not defined in the standard FsRtl filter is returned, it is converted to one of these errors."),
    ("STATUS_UNEXPECTED_MM_MAP_ERROR", 0xC000_00EB, "If an MM error that is not defined in the standard FsRtl filter is returned, it is converted to one of these errors."),
    ("STATUS_UNEXPECTED_MM_EXTEND_ERR", 0xC000_00EC, "If an MM error that is not defined in the standard FsRtl filter is returned, it is converted to one of these errors."),
    ("STATUS_NOT_LOGON_PROCESS", 0xC000_00ED, "The requested action is restricted for use by logon processes only."),
    ("STATUS_LOGON_SESSION_EXISTS", 0xC000_00EE, "An attempt has been made to start a new session manager or LSA logon session by using an ID that is already in use."),
    ("STATUS_INVALID_PARAMETER_1", 0xC000_00EF, "An invalid parameter was passed to a service or function as the first argument."),
    ("STATUS_INVALID_PARAMETER_2", 0xC000_00F0, "An invalid parameter was passed to a service or function as the second argument."),
    ("STATUS_INVALID_PARAMETER_3", 0xC000_00F1, "An invalid parameter was passed to a service or function as the third argument."),
    ("STATUS_INVALID_PARAMETER_4", 0xC000_00F2, "An invalid parameter was passed to a service or function as the fourth argument."),
    ("STATUS_INVALID_PARAMETER_5", 0xC000_00F3, "An invalid parameter was passed to a service or function as the fifth argument."),
    ("STATUS_INVALID_PARAMETER_6", 0xC000_00F4, "An invalid parameter was passed to a service or function as the sixth argument."),
    ("STATUS_INVALID_PARAMETER_7", 0xC000_00F5, "An invalid parameter was passed to a service or function as the seventh argument."),
    ("STATUS_INVALID_PARAMETER_8", 0xC000_00F6, "An invalid parameter was passed to a service or function as the eighth argument."),
    ("STATUS_INVALID_PARAMETER_9", 0xC000_00F7, "An invalid parameter was passed to a service or function as the ninth argument."),
    ("STATUS_INVALID_PARAMETER_10", 0xC000_00F8, "An invalid parameter was passed to a service or function as the tenth argument."),
    ("STATUS_INVALID_PARAMETER_11", 0xC000_00F9, "An invalid parameter was passed to a service or function as the eleventh argument."),
    ("STATUS_INVALID_PARAMETER_12", 0xC000_00FA, "An invalid parameter was passed to a service or function as the twelfth argument."),
    ("STATUS_REDIRECTOR_NOT_STARTED", 0xC000_00FB, "An attempt was made to access a network file, but the network software was not yet started."),
    ("STATUS_REDIRECTOR_STARTED", 0xC000_00FC, "An attempt was made to start the redirector, but the redirector has already been started."),
    ("STATUS_STACK_OVERFLOW", 0xC000_00FD, "A new guard page for the stack cannot be created."),
    ("STATUS_NO_SUCH_PACKAGE", 0xC000_00FE, "A specified authentication package is unknown."),
    ("STATUS_BAD_FUNCTION_TABLE", 0xC000_00FF, "A malformed function table was encountered during an unwind operation."),
    ("STATUS_VARIABLE_NOT_FOUND", 0xC000_0100, "Indicates the specified environment variable name was not found in the specified environment block."),
    ("STATUS_DIRECTORY_NOT_EMPTY", 0xC000_0101, "Indicates that the directory trying to be deleted is not empty."),
    ("STATUS_FILE_CORRUPT_ERROR", 0xC000_0102, "The file or directory is corrupt and unreadable. Run the Chkdsk utility."),
    ("STATUS_NOT_A_DIRECTORY", 0xC000_0103, "A requested opened file is not a directory."),
    ("STATUS_BAD_LOGON_SESSION_STATE", 0xC000_0104, "The logon session is not in a state that is consistent with the requested operation."),
    ("STATUS_LOGON_SESSION_COLLISION", 0xC000_0105, "An internal LSA error has occurred. An authentication package has requested the creation of a logon session but the ID of an already existing logon session has been specified."),
    ("STATUS_NAME_TOO_LONG", 0xC000_0106, "A specified name string is too long for its intended use."),
    ("STATUS_FILES_OPEN", 0xC000_0107, "The user attempted to force close the files on a redirected drive, but there were opened files on the drive, and the user did not specify a sufficient level of force."),
    ("STATUS_CONNECTION_IN_USE", 0xC000_0108, "The user attempted to force close the files on a redirected drive, but there were opened directories on the drive, and the user did not specify a sufficient level of force."),
    ("STATUS_MESSAGE_NOT_FOUND", 0xC000_0109, "RtlFindMessage could not locate the requested message ID in the message table resource."),
    ("STATUS_PROCESS_IS_TERMINATING", 0xC000_010A, "An attempt was made to duplicate an object handle into or out of an exiting process."),
    ("STATUS_INVALID_LOGON_TYPE", 0xC000_010B, "Indicates an invalid value has been provided for the LogonType requested."),
    ("STATUS_NO_GUID_TRANSLATION", 0xC000_010C, "Indicates that an attempt was made to assign protection to a file system file or directory and one of the SIDs in the security descriptor could not be translated into a GUID that could be stored by the file system."),
    ("STATUS_CANNOT_IMPERSONATE", 0xC000_010D, "Indicates that an attempt has been made to impersonate via a named pipe that has not yet been read from."),
    ("STATUS_IMAGE_ALREADY_LOADED", 0xC000_010E, "Indicates that the specified image is already loaded."),
    ("STATUS_CANCELLED", 0xC000_0120, "The I/O request was canceled."),
    ("STATUS_CANNOT_DELETE", 0xC000_0121, "An attempt has been made to remove a file or directory that cannot be deleted."),
    ("STATUS_INVALID_COMPUTER_NAME", 0xC000_0122, "Indicates a name that was specified as a remote computer name is syntactically invalid."),
    ("STATUS_FILE_DELETED", 0xC000_0123, "An I/O request other than close was performed on a file after it was deleted."),
    ("STATUS_FILE_CLOSED", 0xC000_0128, "An I/O request other than close and several other special case operations was attempted using a file object that had already been closed."),
    ("STATUS_DLL_NOT_FOUND", 0xC000_0135, "The application failed to start because a required DLL was not found."),
    ("STATUS_ORDINAL_NOT_FOUND", 0xC000_0138, "The ordinal could not be located in the dynamic link library."),
    ("STATUS_ENTRYPOINT_NOT_FOUND", 0xC000_0139, "The procedure entry point could not be located in the dynamic link library."),
    ("STATUS_CONTROL_C_EXIT", 0xC000_013A, "The application terminated as a result of a CTRL+C."),
    ("STATUS_LOCAL_DISCONNECT", 0xC000_013B, "The network transport on your computer has closed a network connection."),
    ("STATUS_REMOTE_DISCONNECT", 0xC000_013C, "The network transport on a remote computer has closed a network connection."),
    ("STATUS_REMOTE_RESOURCES", 0xC000_013D, "The network resources required to complete the request are not available on the remote computer."),
    ("STATUS_LINK_FAILED", 0xC000_013E, "The network connection was dropped because the remote computer stopped responding."),
    ("STATUS_LINK_TIMEOUT", 0xC000_013F, "The network connection was disconnected because a response from the remote computer timed out."),
    ("STATUS_INVALID_CONNECTION", 0xC000_0140, "The connection handle that was given to the transport was invalid."),
    ("STATUS_INVALID_ADDRESS", 0xC000_0141, "The address handle that was given to the transport was invalid."),
    ("STATUS_DLL_INIT_FAILED", 0xC000_0142, "Initialization of the dynamic link library failed. The process is terminating abnormally."),
    ("STATUS_MISSING_SYSTEMFILE", 0xC000_0143, "A required system file is bad or missing."),
    ("STATUS_UNHANDLED_EXCEPTION", 0xC000_0144, "An unhandled exception occurred in the application."),
    ("STATUS_APP_INIT_FAILURE", 0xC000_0145, "The application was unable to start correctly."),
    ("STATUS_PAGEFILE_CREATE_FAILED", 0xC000_0146, "Unable to create the paging file."),
    ("STATUS_NO_PAGEFILE", 0xC000_0147, "The system is running with no paging file, or a paging file is missing."),
    ("STATUS_INVALID_LEVEL", 0xC000_0148, "The system call level is not correct."),
    ("STATUS_WRONG_PASSWORD_CORE", 0xC000_0149, "The specified network password is not correct."),
    ("STATUS_ILLEGAL_FLOAT_CONTEXT", 0xC000_014A, "A real-mode application issued a floating-point instruction and floating-point hardware is not present."),
    ("STATUS_PIPE_BROKEN", 0xC000_014B, "The pipe operation has failed because the other end of the pipe has been closed."),
    ("STATUS_REGISTRY_CORRUPT", 0xC000_014C, "The structure of one of the files that contains registry data is corrupt; the image of the file in memory is corrupt; or the file could not be recovered because the alternate copy or log was absent or corrupt."),
    ("STATUS_REGISTRY_IO_FAILED", 0xC000_014D, "An I/O operation initiated by the registry failed and cannot be recovered."),
    ("STATUS_NO_EVENT_PAIR", 0xC000_014E, "An event pair synchronization operation was performed using the thread-specific client/server event pair object, but no event pair object was associated with the thread."),
    ("STATUS_UNRECOGNIZED_VOLUME", 0xC000_014F, "The volume does not contain a recognized file system."),
    ("STATUS_SERIAL_NO_DEVICE_INITED", 0xC000_0150, "No serial device was successfully initialized. The serial driver will unload."),
    ("STATUS_NO_SUCH_ALIAS", 0xC000_0151, "The specified local group does not exist."),
    ("STATUS_MEMBER_NOT_IN_ALIAS", 0xC000_0152, "The specified account name is not a member of the group."),
    ("STATUS_MEMBER_IN_ALIAS", 0xC000_0153, "The specified account name is already a member of the group."),
    ("STATUS_ALIAS_EXISTS", 0xC000_0154, "The specified local group already exists."),
    ("STATUS_LOGON_NOT_GRANTED", 0xC000_0155, "A requested type of logon has not been granted by the local security policy of the target system."),
    ("STATUS_TOO_MANY_SECRETS", 0xC000_0156, "The maximum number of secrets that may be stored in a single system was exceeded."),
    ("STATUS_SECRET_TOO_LONG", 0xC000_0157, "The length of a secret exceeds the maximum allowable length."),
    ("STATUS_INTERNAL_DB_ERROR", 0xC000_0158, "The local security authority (LSA) database contains an internal inconsistency."),
    ("STATUS_FULLSCREEN_MODE", 0xC000_0159, "The requested operation cannot be performed in full-screen mode."),
    ("STATUS_TOO_MANY_CONTEXT_IDS", 0xC000_015A, "During a logon attempt, the user's security context accumulated too many security IDs."),
    ("STATUS_LOGON_TYPE_NOT_GRANTED", 0xC000_015B, "A user has requested a type of logon (for example, interactive or network) that has not been granted."),
    ("STATUS_NOT_REGISTRY_FILE", 0xC000_015C, "The system has attempted to load or restore a file into the registry, and the specified file is not in the format of a registry file."),
    ("STATUS_NT_CROSS_ENCRYPTION_REQUIRED", 0xC000_015D, "An attempt was made to change a user password in the security account manager without providing the necessary Windows cross-encrypted password."),
    ("STATUS_DOMAIN_CTRLR_CONFIG_ERROR", 0xC000_015E, "A domain server has an incorrect configuration."),
    ("STATUS_FT_MISSING_MEMBER", 0xC000_015F, "An attempt was made to explicitly access the secondary copy of information via a device control to the fault tolerance driver and the secondary copy is not present in the system."),
    ("STATUS_ILL_FORMED_SERVICE_ENTRY", 0xC000_0160, "A configuration registry node that represents a driver service entry was ill-formed and did not contain the required value entries."),
    ("STATUS_ILLEGAL_CHARACTER", 0xC000_0161, "An illegal character was encountered."),
    ("STATUS_UNMAPPABLE_CHARACTER", 0xC000_0162, "No mapping for the Unicode character exists in the target multibyte code page."),
    ("STATUS_UNDEFINED_CHARACTER", 0xC000_0163, "The Unicode character is not defined in the Unicode character set that is installed on the system."),
    ("STATUS_FLOPPY_VOLUME", 0xC000_0164, "The paging file cannot be created on a floppy disk."),
    ("STATUS_FLOPPY_ID_MARK_NOT_FOUND", 0xC000_0165, "{Floppy Disk Error} While accessing a floppy disk, an ID address mark was not found."),
    ("STATUS_FLOPPY_WRONG_CYLINDER", 0xC000_0166, "{Floppy Disk Error} While accessing a floppy disk, the track address from the sector ID field was found to be different from the track address that is maintained by the controller."),
    ("STATUS_FLOPPY_UNKNOWN_ERROR", 0xC000_0167, "{Floppy Disk Error} The floppy disk controller reported an error that is not recognized by the floppy disk driver."),
    ("STATUS_FLOPPY_BAD_REGISTERS", 0xC000_0168, "{Floppy Disk Error} While accessing a floppy-disk, the controller returned inconsistent results via its registers."),
    ("STATUS_DISK_RECALIBRATE_FAILED", 0xC000_0169, "{Hard Disk Error} While accessing the hard disk, a recalibrate operation failed, even after retries."),
    ("STATUS_DISK_OPERATION_FAILED", 0xC000_016A, "{Hard Disk Error} While accessing the hard disk, a disk operation failed even after retries."),
    ("STATUS_DISK_RESET_FAILED", 0xC000_016B, "{Hard Disk Error} While accessing the hard disk, a disk controller reset was needed, but even that failed."),
    ("STATUS_SHARED_IRQ_BUSY", 0xC000_016C, "An attempt was made to open a device that was sharing an interrupt request (IRQ) with other devices."),
    ("STATUS_FT_ORPHANING", 0xC000_016D, "{FT Orphaning} A disk that is part of a fault-tolerant volume can no longer be accessed."),
    ("STATUS_BIOS_FAILED_TO_CONNECT_INTERRUPT", 0xC000_016E, "The basic input/output system (BIOS) failed to connect a system interrupt to the device or bus for which the device is connected."),
    ("STATUS_PARTITION_FAILURE", 0xC000_0172, "The tape could not be partitioned."),
    ("STATUS_INVALID_BLOCK_LENGTH", 0xC000_0173, "When accessing a new tape of a multi-volume partition, the current blocksize is incorrect."),
    ("STATUS_DEVICE_NOT_PARTITIONED", 0xC000_0174, "The tape partition information could not be found when loading a tape."),
    ("STATUS_UNABLE_TO_LOCK_MEDIA", 0xC000_0175, "An attempt to lock the eject media mechanism failed."),
    ("STATUS_UNABLE_TO_UNLOAD_MEDIA", 0xC000_0176, "An attempt to unload media failed."),
    ("STATUS_EOM_OVERFLOW", 0xC000_0177, "The physical end of tape was detected."),
    ("STATUS_NO_MEDIA", 0xC000_0178, "{No Media} There is no media in the drive."),
    ("STATUS_NO_SUCH_MEMBER", 0xC000_017A, "A member could not be added to or removed from the local group because the member does not exist."),
    ("STATUS_INVALID_MEMBER", 0xC000_017B, "A new member could not be added to a local group because the member has the wrong account type."),
    ("STATUS_KEY_DELETED", 0xC000_017C, "An illegal operation was attempted on a registry key that has been marked for deletion."),
    ("STATUS_NO_LOG_SPACE", 0xC000_017D, "The system could not allocate the required space in a registry log."),
    ("STATUS_TOO_MANY_SIDS", 0xC000_017E, "Too many SIDs have been specified."),
    ("STATUS_LM_CROSS_ENCRYPTION_REQUIRED", 0xC000_017F, "An attempt was made to change a user password in the security account manager without providing the necessary LM cross-encrypted password."),
    ("STATUS_KEY_HAS_CHILDREN", 0xC000_0180, "An attempt was made to create a symbolic link in a registry key that already has subkeys or values."),
    ("STATUS_CHILD_MUST_BE_VOLATILE", 0xC000_0181, "An attempt was made to create a stable subkey under a volatile parent key."),
    ("STATUS_DEVICE_CONFIGURATION_ERROR", 0xC000_0182, "The I/O device is configured incorrectly or the configuration parameters to the driver are incorrect."),
    ("STATUS_DRIVER_INTERNAL_ERROR", 0xC000_0183, "An error was detected between two drivers or within an I/O driver."),
    ("STATUS_INVALID_DEVICE_STATE", 0xC000_0184, "The device is not in a valid state to perform this request."),
    ("STATUS_IO_DEVICE_ERROR", 0xC000_0185, "The I/O device reported an I/O error."),
    ("STATUS_DEVICE_PROTOCOL_ERROR", 0xC000_0186, "A protocol error was detected between the driver and the device."),
    ("STATUS_BACKUP_CONTROLLER", 0xC000_0187, "This operation is only allowed for the primary domain controller of the domain."),
    ("STATUS_LOG_FILE_FULL", 0xC000_0188, "The log file space is insufficient to support this operation."),
    ("STATUS_TOO_LATE", 0xC000_0189, "A write operation was attempted to a volume after it was dismounted."),
    ("STATUS_NO_TRUST_LSA_SECRET", 0xC000_018A, "The workstation does not have a trust secret for the primary domain in the local LSA database."),
    ("STATUS_NO_TRUST_SAM_ACCOUNT", 0xC000_018B, "The SAM database on the Windows Server does not have a computer account for this workstation trust relationship."),
    ("STATUS_TRUSTED_DOMAIN_FAILURE", 0xC000_018C, "The logon request failed because the trust relationship between the primary domain and the trusted domain failed."),
    ("STATUS_TRUSTED_RELATIONSHIP_FAILURE", 0xC000_018D, "The logon request failed because the trust relationship between this workstation and the primary domain failed."),
    ("STATUS_EVENTLOG_FILE_CORRUPT", 0xC000_018E, "The Eventlog log file is corrupt."),
    ("STATUS_EVENTLOG_CANT_START", 0xC000_018F, "No Eventlog log file could be opened. The Eventlog service did not start."),
    ("STATUS_TRUST_FAILURE", 0xC000_0190, "The network logon failed. This may be because the validation authority cannot be reached."),
    ("STATUS_MUTANT_LIMIT_EXCEEDED", 0xC000_0191, "An attempt was made to acquire a mutant such that its maximum count would have been exceeded."),
    ("STATUS_NETLOGON_NOT_STARTED", 0xC000_0192, "An attempt was made to logon, but the NetLogon service was not started."),
    ("STATUS_ACCOUNT_EXPIRED", 0xC000_0193, "The user account has expired."),
    ("STATUS_POSSIBLE_DEADLOCK", 0xC000_0194, "{EXCEPTION} Possible deadlock condition."),
    ("STATUS_NETWORK_CREDENTIAL_CONFLICT", 0xC000_0195, "Multiple connections to a server or shared resource by the same user, using more than one user name, are not allowed."),
    ("STATUS_REMOTE_SESSION_LIMIT", 0xC000_0196, "An attempt was made to establish a session to a network server, but there are already too many sessions established to that server."),
    ("STATUS_EVENTLOG_FILE_CHANGED", 0xC000_0197, "The log file has changed between reads."),
    ("STATUS_NOLOGON_INTERDOMAIN_TRUST_ACCOUNT", 0xC000_0198, "The account used is an interdomain trust account. Use your global user account or local user account to access this server."),
    ("STATUS_NOLOGON_WORKSTATION_TRUST_ACCOUNT", 0xC000_0199, "The account used is a computer account. Use your global user account or local user account to access this server."),
    ("STATUS_NOLOGON_SERVER_TRUST_ACCOUNT", 0xC000_019A, "The account used is a server trust account. Use your global user account or local user account to access this server."),
    ("STATUS_DOMAIN_TRUST_INCONSISTENT", 0xC000_019B, "The name or SID of the specified domain is inconsistent with the trust information for that domain."),
    ("STATUS_FS_DRIVER_REQUIRED", 0xC000_019C, "A volume has been accessed for which a file system driver is required that has not yet been loaded."),
    ("STATUS_IMAGE_ALREADY_LOADED_AS_DLL", 0xC000_019D, "Indicates that the specified image is already loaded as a DLL."),
    ("STATUS_USER_SESSION_DELETED", 0xC000_0203, "The user session key was not found in the cache."),
    ("STATUS_RESOURCE_LANG_NOT_FOUND", 0xC000_0204, "The specified resource language ID cannot be found in the image file."),
    ("STATUS_INSUFF_SERVER_RESOURCES", 0xC000_0205, "Not enough server memory resources are available to complete this request."),
    ("STATUS_INVALID_BUFFER_SIZE", 0xC000_0206, "The size of the buffer is invalid for the specified operation."),
    ("STATUS_INVALID_ADDRESS_COMPONENT", 0xC000_0207, "The transport rejected the specified network address as invalid."),
    ("STATUS_INVALID_ADDRESS_WILDCARD", 0xC000_0208, "The transport rejected the specified network address due to invalid use of a wildcard."),
    ("STATUS_TOO_MANY_ADDRESSES", 0xC000_0209, "The transport address could not be opened because all the available addresses are in use."),
    ("STATUS_ADDRESS_ALREADY_EXISTS", 0xC000_020A, "The transport address could not be opened because it already exists."),
    ("STATUS_ADDRESS_CLOSED", 0xC000_020B, "The transport address is now closed."),
    ("STATUS_CONNECTION_DISCONNECTED", 0xC000_020C, "The transport connection is now disconnected."),
    ("STATUS_CONNECTION_RESET", 0xC000_020D, "The transport connection has been reset."),
    ("STATUS_TOO_MANY_NODES", 0xC000_020E, "The transport cannot dynamically acquire any more nodes."),
    ("STATUS_TRANSACTION_ABORTED", 0xC000_020F, "The transport aborted a pending transaction."),
    ("STATUS_TRANSACTION_TIMED_OUT", 0xC000_0210, "The transport timed out a request that is waiting for a response."),
    ("STATUS_TRANSACTION_NO_RELEASE", 0xC000_0211, "The transport did not receive a release for a pending response."),
    ("STATUS_TRANSACTION_NO_MATCH", 0xC000_0212, "The transport did not find a transaction that matches the specific token."),
    ("STATUS_TRANSACTION_RESPONDED", 0xC000_0213, "The transport had previously responded to a transaction request."),
    ("STATUS_TRANSACTION_INVALID_ID", 0xC000_0214, "The transport does not recognize the specified transaction request ID."),
    ("STATUS_TRANSACTION_INVALID_TYPE", 0xC000_0215, "The transport does not recognize the specified transaction request type."),
    ("STATUS_NOT_SERVER_SESSION", 0xC000_0216, "The transport can only process the specified request on the server side of a session."),
    ("STATUS_NOT_CLIENT_SESSION", 0xC000_0217, "The transport can only process the specified request on the client side of a session."),
    ("STATUS_CANNOT_LOAD_REGISTRY_FILE", 0xC000_0218, "{Registry File Failure} The registry cannot load the hive (file). It is corrupt, absent, or not writable."),
    ("STATUS_DEBUG_ATTACH_FAILED", 0xC000_0219, "{Unexpected Failure in DebugActiveProcess} An unexpected failure occurred while processing a DebugActiveProcess API request."),
    ("STATUS_SYSTEM_PROCESS_TERMINATED", 0xC000_021A, "{Fatal System Error} The system process terminated unexpectedly. The system has been shut down."),
    ("STATUS_DATA_NOT_ACCEPTED", 0xC000_021B, "{Data Not Accepted} The TDI client could not handle the data received during an indication."),
    ("STATUS_NO_BROWSER_SERVERS_FOUND", 0xC000_021C, "{Unable to Retrieve Browser Server List} The list of servers for this workgroup is not currently available."),
    ("STATUS_VDM_HARD_ERROR", 0xC000_021D, "NTVDM encountered a hard error."),
    ("STATUS_DRIVER_CANCEL_TIMEOUT", 0xC000_021E, "{Cancel Timeout} The driver failed to complete a canceled I/O request in the allotted time."),
    ("STATUS_REPLY_MESSAGE_MISMATCH", 0xC000_021F, "{Reply Message Mismatch} An attempt was made to reply to an LPC message, but the thread specified by the client ID in the message was not waiting on that message."),
    ("STATUS_MAPPED_ALIGNMENT", 0xC000_0220, "{Mapped View Alignment Incorrect} An attempt was made to map a view of a file, but either the specified base address or the offset into the file were not aligned on the proper allocation granularity."),
    ("STATUS_IMAGE_CHECKSUM_MISMATCH", 0xC000_0221, "{Bad Image Checksum} The image is possibly corrupt. The header checksum does not match the computed checksum."),
    ("STATUS_LOST_WRITEBEHIND_DATA", 0xC000_0222, "{Delayed Write Failed} Windows was unable to save all the data for the file. The data has been lost."),
    ("STATUS_CLIENT_SERVER_PARAMETERS_INVALID", 0xC000_0223, "The parameters passed to the server in the client/server shared memory window were invalid."),
    ("STATUS_PASSWORD_MUST_CHANGE", 0xC000_0224, "The user password must be changed before logging on the first time."),
    ("STATUS_NOT_FOUND", 0xC000_0225, "The object was not found."),
    ("STATUS_NOT_TINY_STREAM", 0xC000_0226, "The stream is not a tiny stream."),
    ("STATUS_RECOVERY_FAILURE", 0xC000_0227, "A transaction recovery failed."),
    ("STATUS_STACK_OVERFLOW_READ", 0xC000_0228, "The request must be handled by the stack overflow code."),
    ("STATUS_FAIL_CHECK", 0xC000_0229, "A consistency check failed."),
    ("STATUS_DUPLICATE_OBJECTID", 0xC000_022A, "The attempt to insert the ID in the index failed because the ID is already in the index."),
    ("STATUS_OBJECTID_EXISTS", 0xC000_022B, "The attempt to set the object ID failed because the object already has an ID."),
    ("STATUS_CONVERT_TO_LARGE", 0xC000_022C, "Internal OFS status codes indicating how an allocation operation is handled."),
    ("STATUS_RETRY", 0xC000_022D, "The request needs to be retried."),
    ("STATUS_FOUND_OUT_OF_SCOPE", 0xC000_022E, "The attempt to find the object found an object on the volume that matches by ID; however, it is out of the scope of the handle that is used for the operation."),
    ("STATUS_ALLOCATE_BUCKET", 0xC000_022F, "The bucket array must be grown. Retry the transaction after doing so."),
    ("STATUS_PROPSET_NOT_FOUND", 0xC000_0230, "The specified property set does not exist on the object."),
    ("STATUS_MARSHALL_OVERFLOW", 0xC000_0231, "The user/kernel marshaling buffer has overflowed."),
    ("STATUS_INVALID_VARIANT", 0xC000_0232, "The supplied variant structure contains invalid data."),
    ("STATUS_DOMAIN_CONTROLLER_NOT_FOUND", 0xC000_0233, "A domain controller for this domain was not found."),
    ("STATUS_ACCOUNT_LOCKED_OUT", 0xC000_0234, "The user account has been automatically locked because too many invalid logon attempts or password change attempts have been requested."),
    ("STATUS_HANDLE_NOT_CLOSABLE", 0xC000_0235, "NtClose was called on a handle that was protected from close via NtSetInformationObject."),
    ("STATUS_CONNECTION_REFUSED", 0xC000_0236, "The transport-connection attempt was refused by the remote system."),
    ("STATUS_GRACEFUL_DISCONNECT", 0xC000_0237, "The transport connection was gracefully closed."),
    ("STATUS_ADDRESS_ALREADY_ASSOCIATED", 0xC000_0238, "The transport endpoint already has an address associated with it."),
    ("STATUS_ADDRESS_NOT_ASSOCIATED", 0xC000_0239, "An address has not yet been associated with the transport endpoint."),
    ("STATUS_CONNECTION_INVALID", 0xC000_023A, "An operation was attempted on a nonexistent transport connection."),
    ("STATUS_CONNECTION_ACTIVE", 0xC000_023B, "An invalid operation was attempted on an active transport connection."),
    ("STATUS_NETWORK_UNREACHABLE", 0xC000_023C, "The remote network is not reachable by the transport."),
    ("STATUS_HOST_UNREACHABLE", 0xC000_023D, "The remote system is not reachable by the transport."),
    ("STATUS_PROTOCOL_UNREACHABLE", 0xC000_023E, "The remote system does not support the transport protocol."),
    ("STATUS_PORT_UNREACHABLE", 0xC000_023F, "No service is operating at the destination port of the transport on the remote system."),
    ("STATUS_REQUEST_ABORTED", 0xC000_0240, "The request was aborted."),
    ("STATUS_CONNECTION_ABORTED", 0xC000_0241, "The transport connection was aborted by the local system."),
    ("STATUS_BAD_COMPRESSION_BUFFER", 0xC000_0242, "The specified buffer contains ill-formed data."),
    ("STATUS_USER_MAPPED_FILE", 0xC000_0243, "The requested operation cannot be performed on a file with a user mapped section open."),
    ("STATUS_AUDIT_FAILED", 0xC000_0244, "An attempt to generate a security audit failed."),
    ("STATUS_TIMER_RESOLUTION_NOT_SET", 0xC000_0245, "The timer resolution was not previously set by the current process."),
    ("STATUS_CONNECTION_COUNT_LIMIT", 0xC000_0246, "A connection to the server could not be made because the limit on the number of concurrent connections for this account has been reached."),
    ("STATUS_LOGIN_TIME_RESTRICTION", 0xC000_0247, "Attempting to log on during an unauthorized time of day for this account."),
    ("STATUS_LOGIN_WKSTA_RESTRICTION", 0xC000_0248, "The account is not authorized to log on from this station."),
    ("STATUS_IMAGE_MP_UP_MISMATCH", 0xC000_0249, "{UP/MP Image Mismatch} The image has been modified for use on a uniprocessor system, but you are running it on a multiprocessor machine."),
    ("STATUS_INSUFFICIENT_LOGON_INFO", 0xC000_0250, "There is insufficient account information to log you on."),
    ("STATUS_BAD_DLL_ENTRYPOINT", 0xC000_0251, "{Invalid DLL Entrypoint} The dynamic link library is not written correctly. The stack pointer has been left in an inconsistent state."),
    ("STATUS_BAD_SERVICE_ENTRYPOINT", 0xC000_0252, "{Invalid Service Callback Entrypoint} The service is not written correctly. The stack pointer has been left in an inconsistent state."),
    ("STATUS_LPC_REPLY_LOST", 0xC000_0253, "The server received the messages but did not send a reply."),
    ("STATUS_IP_ADDRESS_CONFLICT1", 0xC000_0254, "There is an IP address conflict with another system on the network."),
    ("STATUS_IP_ADDRESS_CONFLICT2", 0xC000_0255, "There is an IP address conflict with another system on the network."),
    ("STATUS_REGISTRY_QUOTA_LIMIT", 0xC000_0256, "{Low On Registry Space} The system has reached the maximum size that is allowed for the system part of the registry."),
    ("STATUS_PATH_NOT_COVERED", 0xC000_0257, "The contacted server does not support the indicated part of the DFS namespace."),
    ("STATUS_NO_CALLBACK_ACTIVE", 0xC000_0258, "A callback return system service cannot be executed when no callback is active."),
    ("STATUS_LICENSE_QUOTA_EXCEEDED", 0xC000_0259, "The service being accessed is licensed for a particular number of connections."),
    ("STATUS_PWD_TOO_SHORT", 0xC000_025A, "The password provided is too short to meet the policy of your user account."),
    ("STATUS_PWD_TOO_RECENT", 0xC000_025B, "The policy of your user account does not allow you to change passwords too frequently."),
    ("STATUS_PWD_HISTORY_CONFLICT", 0xC000_025C, "You have attempted to change your password to one that you have used in the past."),
    ("STATUS_PLUGPLAY_NO_DEVICE", 0xC000_025E, "You have attempted to load a legacy device driver while its device instance had been disabled."),
    ("STATUS_UNSUPPORTED_COMPRESSION", 0xC000_025F, "The specified compression format is unsupported."),
    ("STATUS_INVALID_HW_PROFILE", 0xC000_0260, "The specified hardware profile configuration is invalid."),
    ("STATUS_INVALID_PLUGPLAY_DEVICE_PATH", 0xC000_0261, "The specified Plug and Play registry device path is invalid."),
    ("STATUS_DRIVER_ORDINAL_NOT_FOUND", 0xC000_0262, "{Driver Entry Point Not Found} The device driver could not locate the ordinal in driver."),
    ("STATUS_DRIVER_ENTRYPOINT_NOT_FOUND", 0xC000_0263, "{Driver Entry Point Not Found} The device driver could not locate the entry point in driver."),
    ("STATUS_RESOURCE_NOT_OWNED", 0xC000_0264, "{Application Error} The application attempted to release a resource it did not own."),
    ("STATUS_TOO_MANY_LINKS", 0xC000_0265, "An attempt was made to create more links on a file than the file system supports."),
    ("STATUS_QUOTA_LIST_INCONSISTENT", 0xC000_0266, "The specified quota list is internally inconsistent with its descriptor."),
    ("STATUS_FILE_IS_OFFLINE", 0xC000_0267, "The specified file has been relocated to offline storage."),
    ("STATUS_EVALUATION_EXPIRATION", 0xC000_0268, "{Windows Evaluation Notification} The evaluation period for this installation of Windows has expired."),
    ("STATUS_ILLEGAL_DLL_RELOCATION", 0xC000_0269, "{Illegal System DLL Relocation} The system DLL was relocated in memory. The application will not run properly."),
    ("STATUS_LICENSE_VIOLATION", 0xC000_026A, "{License Violation} The system has detected tampering with your registered product type."),
    ("STATUS_DLL_INIT_FAILED_LOGOFF", 0xC000_026B, "{DLL Initialization Failed} The application failed to initialize because the window station is shutting down."),
    ("STATUS_DRIVER_UNABLE_TO_LOAD", 0xC000_026C, "{Unable to Load Device Driver} The device driver could not be loaded."),
    ("STATUS_DFS_UNAVAILABLE", 0xC000_026D, "DFS is unavailable on the contacted server."),
    ("STATUS_VOLUME_DISMOUNTED", 0xC000_026E, "An operation was attempted to a volume after it was dismounted."),
    ("STATUS_WX86_INTERNAL_ERROR", 0xC000_026F, "An internal error occurred in the Win32 x86 emulation subsystem."),
    ("STATUS_WX86_FLOAT_STACK_CHECK", 0xC000_0270, "Win32 x86 emulation subsystem floating-point stack check."),
    ("STATUS_VALIDATE_CONTINUE", 0xC000_0271, "The validation process needs to continue on to the next step."),
    ("STATUS_NO_MATCH", 0xC000_0272, "There was no match for the specified key in the index."),
    ("STATUS_NO_MORE_MATCHES", 0xC000_0273, "There are no more matches for the current index enumeration."),
    ("STATUS_NOT_A_REPARSE_POINT", 0xC000_0275, "The NTFS file or directory is not a reparse point."),
    ("STATUS_IO_REPARSE_TAG_INVALID", 0xC000_0276, "The Windows I/O reparse tag passed for the NTFS reparse point is invalid."),
    ("STATUS_IO_REPARSE_TAG_MISMATCH", 0xC000_0277, "The Windows I/O reparse tag does not match the one that is in the NTFS reparse point."),
    ("STATUS_IO_REPARSE_DATA_INVALID", 0xC000_0278, "The user data passed for the NTFS reparse point is invalid."),
    ("STATUS_IO_REPARSE_TAG_NOT_HANDLED", 0xC000_0279, "The layered file system driver for this I/O tag did not handle it when needed."),
    ("STATUS_REPARSE_POINT_NOT_RESOLVED", 0xC000_0280, "The NTFS symbolic link could not be resolved even though the initial file name is valid."),
    ("STATUS_DIRECTORY_IS_A_REPARSE_POINT", 0xC000_0281, "The NTFS directory is a reparse point."),
    ("STATUS_RANGE_LIST_CONFLICT", 0xC000_0282, "The range could not be added to the range list because of a conflict."),
    ("STATUS_SOURCE_ELEMENT_EMPTY", 0xC000_0283, "The specified medium changer source element contains no media."),
    ("STATUS_DESTINATION_ELEMENT_FULL", 0xC000_0284, "The specified medium changer destination element already contains media."),
    ("STATUS_ILLEGAL_ELEMENT_ADDRESS", 0xC000_0285, "The specified medium changer element does not exist."),
    ("STATUS_MAGAZINE_NOT_PRESENT", 0xC000_0286, "The specified element is contained in a magazine that is no longer present."),
    ("STATUS_REINITIALIZATION_NEEDED", 0xC000_0287, "The device requires re-initialization due to hardware errors."),
    ("STATUS_ENCRYPTION_FAILED", 0xC000_028A, "The file encryption attempt failed."),
    ("STATUS_DECRYPTION_FAILED", 0xC000_028B, "The file decryption attempt failed."),
    ("STATUS_RANGE_NOT_FOUND", 0xC000_028C, "The specified range could not be found in the range list."),
    ("STATUS_NO_RECOVERY_POLICY", 0xC000_028D, "There is no encryption recovery policy configured for this system."),
    ("STATUS_NO_EFS", 0xC000_028E, "The required encryption driver is not loaded for this system."),
    ("STATUS_WRONG_EFS", 0xC000_028F, "The file was encrypted with a different encryption driver than is currently loaded."),
    ("STATUS_NO_USER_KEYS", 0xC000_0290, "There are no EFS keys defined for the user."),
    ("STATUS_FILE_NOT_ENCRYPTED", 0xC000_0291, "The specified file is not encrypted."),
    ("STATUS_NOT_EXPORT_FORMAT", 0xC000_0292, "The specified file is not in the defined EFS export format."),
    ("STATUS_FILE_ENCRYPTED", 0xC000_0293, "The specified file is encrypted and the user does not have the ability to decrypt it."),
    ("STATUS_WMI_GUID_NOT_FOUND", 0xC000_0295, "The GUID passed was not recognized as valid by a WMI data provider."),
    ("STATUS_WMI_INSTANCE_NOT_FOUND", 0xC000_0296, "The instance name passed was not recognized as valid by a WMI data provider."),
    ("STATUS_WMI_ITEMID_NOT_FOUND", 0xC000_0297, "The data item ID passed was not recognized as valid by a WMI data provider."),
    ("STATUS_WMI_TRY_AGAIN", 0xC000_0298, "The WMI request could not be completed and should be retried."),
    ("STATUS_SHARED_POLICY", 0xC000_0299, "The policy object is shared and can only be modified at the root."),
    ("STATUS_POLICY_OBJECT_NOT_FOUND", 0xC000_029A, "The policy object does not exist when it should."),
    ("STATUS_POLICY_ONLY_IN_DS", 0xC000_029B, "The requested policy information only lives in the Ds."),
    ("STATUS_VOLUME_NOT_UPGRADED", 0xC000_029C, "The volume must be upgraded to enable this feature."),
    ("STATUS_REMOTE_STORAGE_NOT_ACTIVE", 0xC000_029D, "The remote storage service is not operational at this time."),
    ("STATUS_REMOTE_STORAGE_MEDIA_ERROR", 0xC000_029E, "The remote storage service encountered a media error."),
    ("STATUS_NO_TRACKING_SERVICE", 0xC000_029F, "The tracking (workstation) service is not running."),
    ("STATUS_SERVER_SID_MISMATCH", 0xC000_02A0, "The server process is running under a SID that is different from the SID that is required by client."),
    ("STATUS_FLOAT_MULTIPLE_FAULTS", 0xC000_02B4, "{EXCEPTION} Multiple floating-point faults."),
    ("STATUS_FLOAT_MULTIPLE_TRAPS", 0xC000_02B5, "{EXCEPTION} Multiple floating-point traps."),
    ("STATUS_DATATYPE_MISALIGNMENT_ERROR", 0xC000_02C5, "A data type misalignment error was detected in a load or store instruction."),
    ("STATUS_REG_NAT_CONSUMPTION", 0xC000_02C9, "{Register NaT Consumption} A NaT value has been consumed."),
    ("STATUS_ACCESS_DISABLED_BY_POLICY_DEFAULT", 0xC000_0361, "Access to the program has been blocked by the default software restriction policy."),
    ("STATUS_ACCESS_DISABLED_BY_POLICY_PATH", 0xC000_0362, "Access to the program has been blocked by a software restriction policy path rule."),
    ("STATUS_ACCESS_DISABLED_BY_POLICY_PUBLISHER", 0xC000_0363, "Access to the program has been blocked by a software restriction policy publisher rule."),
    ("STATUS_ACCESS_DISABLED_BY_POLICY_OTHER", 0xC000_0364, "Access to the program has been blocked by a software restriction policy."),
    ("STATUS_DRIVER_BLOCKED_CRITICAL", 0xC000_036B, "The driver has been blocked from loading and the system may not boot correctly."),
    ("STATUS_DRIVER_BLOCKED", 0xC000_036C, "The driver has been blocked from loading."),
    ("STATUS_HEAP_CORRUPTION", 0xC000_0374, "A heap has been corrupted."),
    ("STATUS_SMARTCARD_WRONG_PIN", 0xC000_0380, "An incorrect PIN was presented to the smart card."),
    ("STATUS_SMARTCARD_CARD_BLOCKED", 0xC000_0381, "The smart card is blocked."),
    ("STATUS_PER_USER_TRUST_QUOTA_EXCEEDED", 0xC000_0401, "The quota of the number of machine accounts a user may add to the domain has been exceeded."),
    ("STATUS_ALL_USER_TRUST_QUOTA_EXCEEDED", 0xC000_0402, "The quota of the number of machine accounts all users may add to the domain has been exceeded."),
    ("STATUS_USER_DELETE_TRUST_QUOTA_EXCEEDED", 0xC000_0403, "The quota of the number of machine accounts a user may delete from the domain has been exceeded."),
    ("STATUS_STACK_BUFFER_OVERRUN", 0xC000_0409, "The system detected an overrun of a stack-based buffer in this application."),
    ("STATUS_INVALID_CRUNTIME_PARAMETER", 0xC000_0417, "An invalid parameter was passed to a C runtime function."),
    ("STATUS_FATAL_USER_CALLBACK_EXCEPTION", 0xC000_041D, "An unhandled exception was encountered during a user callback."),
    ("STATUS_ASSERTION_FAILURE", 0xC000_0420, "An assertion failure has occurred."),
    ("STATUS_INVALID_IMAGE_HASH", 0xC000_0428, "The hash for the image cannot be found in the system catalogs."),
    ("STATUS_INVALID_SIGNATURE", 0xC000_A000, "The cryptographic signature is invalid."),
    ("STATUS_AUTH_TAG_MISMATCH", 0xC000_A002, "The computed authentication tag did not match the input authentication tag."),
    ("STATUS_WOW_ASSERTION", 0xC000_9898, "WOW assertion error."),
    ("DBG_NO_STATE_CHANGE", 0xC001_0001, "The debugger did not perform a state change."),
    ("DBG_APP_NOT_IDLE", 0xC001_0002, "The debugger found that the application is not idle."),
    ("RPC_NT_INVALID_STRING_BINDING", 0xC002_0001, "The string binding is invalid."),
    ("RPC_NT_WRONG_KIND_OF_BINDING", 0xC002_0002, "The binding handle is not the correct type."),
    ("RPC_NT_INVALID_BINDING", 0xC002_0003, "The binding handle is invalid."),
    ("RPC_NT_PROTSEQ_NOT_SUPPORTED", 0xC002_0004, "The RPC protocol sequence is not supported."),
    ("RPC_NT_INVALID_RPC_PROTSEQ", 0xC002_0005, "The RPC protocol sequence is invalid."),
    ("RPC_NT_INVALID_STRING_UUID", 0xC002_0006, "The string UUID is invalid."),
    ("RPC_NT_INVALID_ENDPOINT_FORMAT", 0xC002_0007, "The endpoint format is invalid."),
    ("RPC_NT_INVALID_NET_ADDR", 0xC002_0008, "The network address is invalid."),
    ("RPC_NT_NO_ENDPOINT_FOUND", 0xC002_0009, "No endpoint was found."),
    ("RPC_NT_INVALID_TIMEOUT", 0xC002_000A, "The time-out value is invalid."),
    ("RPC_NT_OBJECT_NOT_FOUND", 0xC002_000B, "The object UUID was not found."),
    ("RPC_NT_ALREADY_REGISTERED", 0xC002_000C, "The object UUID has already been registered."),
    ("RPC_NT_TYPE_ALREADY_REGISTERED", 0xC002_000D, "The type UUID has already been registered."),
    ("RPC_NT_ALREADY_LISTENING", 0xC002_000E, "The RPC server is already listening."),
    ("RPC_NT_NO_PROTSEQS_REGISTERED", 0xC002_000F, "No protocol sequences have been registered."),
    ("RPC_NT_NOT_LISTENING", 0xC002_0010, "The RPC server is not listening."),
    ("RPC_NT_SERVER_UNAVAILABLE", 0xC002_0017, "The RPC server is unavailable."),
    ("STATUS_CLUSTER_INVALID_NODE", 0xC013_0001, "The cluster node is not valid."),
    ("STATUS_CLUSTER_NODE_EXISTS", 0xC013_0002, "The cluster node already exists."),
    ("STATUS_CLUSTER_JOIN_IN_PROGRESS", 0xC013_0003, "A node is in the process of joining the cluster."),
    ("STATUS_CLUSTER_NODE_NOT_FOUND", 0xC013_0004, "The cluster node was not found."),
    ("STATUS_CLUSTER_LOCAL_NODE_NOT_FOUND", 0xC013_0005, "The cluster local node information was not found."),
    ("STATUS_CLUSTER_NETWORK_EXISTS", 0xC013_0006, "The cluster network already exists."),
    ("STATUS_CLUSTER_NETWORK_NOT_FOUND", 0xC013_0007, "The cluster network was not found."),
    ("STATUS_TRANSACTIONAL_CONFLICT", 0xC019_0001, "The function attempted to use a name that is reserved for use by another transaction."),
    ("STATUS_INVALID_TRANSACTION", 0xC019_0002, "The transaction handle associated with this operation is invalid."),
    ("STATUS_TRANSACTION_NOT_ACTIVE", 0xC019_0003, "The requested operation was made in the context of a transaction that is no longer active."),
    ("STATUS_TM_INITIALIZATION_FAILED", 0xC019_0004, "The transaction manager was unable to be successfully initialized."),
    ("STATUS_RM_NOT_ACTIVE", 0xC019_0005, "Transaction support within the specified file system resource manager was not started or was shut down due to an error."),
    ("STATUS_RM_METADATA_CORRUPT", 0xC019_0006, "The metadata of the resource manager has been corrupted. The resource manager will not function."),
    ("STATUS_TRANSACTION_NOT_JOINED", 0xC019_0007, "The resource manager attempted to prepare a transaction that it has not successfully joined."),
    ("STATUS_FLT_NO_HANDLER_DEFINED", 0xC01C_0001, "A handler was not defined by the filter for this operation."),
    ("STATUS_FLT_CONTEXT_ALREADY_DEFINED", 0xC01C_0002, "A context is already defined for this object."),
    ("STATUS_FLT_INVALID_ASYNCHRONOUS_REQUEST", 0xC01C_0003, "Asynchronous requests are not valid for this operation."),
    ("STATUS_FLT_DISALLOW_FAST_IO", 0xC01C_0004, "An internal error occurred within the filter manager."),
    ("STATUS_FLT_INVALID_NAME_REQUEST", 0xC01C_0005, "An invalid name request was made. The name requested cannot be retrieved at this time."),
    ("STATUS_FLT_NOT_SAFE_TO_POST_OPERATION", 0xC01C_0006, "Posting this operation to a worker thread for further processing is not safe at this time."),
    ("STATUS_FLT_NOT_INITIALIZED", 0xC01C_0007, "The filter manager was not initialized when a filter tried to register."),
    ("STATUS_FLT_FILTER_NOT_READY", 0xC01C_0008, "The filter is not ready for attachment to volumes because it has not finished initializing."),
    ("STATUS_FLT_INSTANCE_NOT_FOUND", 0xC01C_0015, "An instance corresponding to the given instance name was not found."),
    ("STATUS_FLT_VOLUME_NOT_FOUND", 0xC01C_0014, "A volume corresponding to the given volume name was not found."),
    ("STATUS_FLT_FILTER_NOT_FOUND", 0xC01C_0013, "A filter corresponding to the given filter name was not found."),
];
